//! CS2 Skin Market Analytics
//!
//! Offline driver for the analytics core: replays recorded snapshots and prints
//! structured reports as JSON.

use clap::{Parser, Subcommand};
use skin_analytics::{
    analysis::MarketAnalyzer,
    config::Config,
    error::AnalyticsError,
    feed::{QuoteSource, Snapshot},
    history::PriceHistoryStore,
    monitor::{PriceMonitor, QuoteUpdate},
    news::{NewsFeedResponse, NewsItem, NewsTracker, DEFAULT_NEWS_LIMIT},
    portfolio::{Holding, PortfolioSummary},
    types::Mode,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "skin-analytics")]
#[command(about = "Price analytics for CS2 skin market items")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze items from a recorded snapshot
    Analyze {
        /// Snapshot JSON file
        #[arg(short, long)]
        snapshot: String,
        /// Only analyze this item
        #[arg(short, long)]
        item: Option<String>,
        /// investor or trader
        #[arg(short, long, default_value = "investor")]
        mode: Mode,
    },
    /// Replay snapshot quotes through the price monitor
    Monitor {
        #[arg(short, long)]
        snapshot: String,
        /// Number of monitor passes over the watched items
        #[arg(short, long, default_value = "1")]
        rounds: usize,
    },
    /// Classify headlines from a news feed response
    News {
        #[arg(short, long)]
        file: String,
        /// Previously seen news feed response; only new notable headlines are printed
        #[arg(short, long)]
        previous: Option<String>,
    },
    /// Summarize snapshot items as a portfolio
    Portfolio {
        #[arg(short, long)]
        snapshot: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Analyze { snapshot, item, mode } => analyze(config, &snapshot, item, mode),
        Commands::Monitor { snapshot, rounds } => monitor(config, &snapshot, rounds).await,
        Commands::News { file, previous } => news(&file, previous.as_deref()),
        Commands::Portfolio { snapshot } => portfolio(config, &snapshot),
    }
}

fn seeded_store(config: &Config, snapshot: &Snapshot) -> Arc<PriceHistoryStore> {
    let store = Arc::new(PriceHistoryStore::from_config(&config.analytics));
    let kept = snapshot.seed(&store);
    tracing::info!("Seeded {} price points for {} items", kept, snapshot.items.len());
    store
}

fn analyze(config: Config, path: &str, item: Option<String>, mode: Mode) -> anyhow::Result<()> {
    let snapshot = Snapshot::load(path)?;
    let analyzer = MarketAnalyzer::new(seeded_store(&config, &snapshot), &config.analytics);

    let items: Vec<String> = match item {
        Some(item) => {
            if !snapshot.items.contains_key(&item) {
                return Err(AnalyticsError::UnknownItem(item).into());
            }
            vec![item]
        }
        None => snapshot.items.keys().cloned().collect(),
    };

    let reports: Vec<_> = items
        .iter()
        .map(|item| {
            let quote = snapshot.items.get(item).map(|i| i.quote.clone()).unwrap_or_default();
            analyzer.analyze(item, &quote, mode)
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}

async fn monitor(config: Config, path: &str, rounds: usize) -> anyhow::Result<()> {
    let snapshot = Snapshot::load(path)?;
    let store = seeded_store(&config, &snapshot);
    let source = snapshot.quote_source();
    let monitor = Arc::new(PriceMonitor::new(store, &config.analytics, &config.monitor));

    let items: Vec<String> = if snapshot.items.is_empty() {
        config.watchlist.items.iter().take(config.monitor.watch_limit).cloned().collect()
    } else {
        snapshot.items.keys().cloned().collect()
    };

    let (quote_tx, quote_rx) = mpsc::channel::<QuoteUpdate>(100);
    let (signal_tx, mut signal_rx) = mpsc::channel(100);

    let runner = {
        let monitor = monitor.clone();
        tokio::spawn(async move { monitor.run(quote_rx, signal_tx).await })
    };

    let producer = tokio::spawn(async move {
        for round in 1..=rounds {
            tracing::info!("Monitor pass {}/{}", round, rounds);
            for item in &items {
                match source.fetch_quote(item).await {
                    Ok(Some(quote)) => {
                        if quote_tx.send(QuoteUpdate::now(item.clone(), quote)).await.is_err() {
                            return;
                        }
                    }
                    Ok(None) => tracing::debug!("No quote for {}", item),
                    Err(e) => tracing::warn!("Failed to fetch quote for {}: {}", item, e),
                }
            }
        }
    });

    while let Some(signal) = signal_rx.recv().await {
        println!("{}", serde_json::to_string(&signal)?);
    }

    producer.await?;
    let sent = runner.await?;
    tracing::info!("Monitor finished with {} signals", sent);
    Ok(())
}

fn load_news(path: &str) -> anyhow::Result<Vec<NewsItem>> {
    let raw = std::fs::read_to_string(path)?;
    let response: NewsFeedResponse = serde_json::from_str(&raw)?;
    Ok(response.into_items(DEFAULT_NEWS_LIMIT))
}

fn news(path: &str, previous: Option<&str>) -> anyhow::Result<()> {
    let items = load_news(path)?;

    let output = match previous {
        Some(previous) => {
            let mut tracker = NewsTracker::new();
            tracker.ingest(&load_news(previous)?);
            let fresh = tracker.ingest_notable(&items);
            tracing::info!("{} headlines, {} new and notable", items.len(), fresh.len());
            fresh
        }
        None => {
            let notable = items.iter().filter(|i| i.impact.is_notable()).count();
            tracing::info!("{} headlines, {} notable", items.len(), notable);
            items
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn portfolio(config: Config, path: &str) -> anyhow::Result<()> {
    let snapshot = Snapshot::load(path)?;
    let analyzer = MarketAnalyzer::new(seeded_store(&config, &snapshot), &config.analytics);

    let holdings: Vec<Holding> = snapshot
        .items
        .iter()
        .map(|(item, data)| Holding {
            item: item.clone(),
            trend: analyzer.trend(item),
            quote: Some(data.quote.clone()),
        })
        .collect();

    match PortfolioSummary::build(&holdings) {
        Some(summary) => println!("{}", serde_json::to_string_pretty(&summary)?),
        None => tracing::warn!("Snapshot has no items, nothing to summarize"),
    }
    Ok(())
}
