//! Forward Table - forwarded payments per channel
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin forward_table -- --days 7 --order incoming
//! cargo run --release --bin forward_table -- --print
//! ```
//!
//! ## Environment Variables
//!
//! - FORWARDS_URL - Node API base URL serving `/forwards?days=N`
//! - FORWARDS_FILE - JSON snapshot of forwards (used when FORWARDS_URL is unset)
//! - FORWARDS_TOKEN - Optional bearer token for the node API
//! - FORWARDS_DAYS - Time window in days (default: 7)
//! - FORWARDS_ORDER - alias | incoming | outgoing | amount (default: amount)
//! - CURRENCY - sat | btc | fiat (default: sat), with FIAT_PRICE / FIAT_SYMBOL
//! - DISPLAY_VALUES - Show amounts (default: true)
//! - UI_REFRESH_MS - Redraw interval (default: 250)
//! - RUST_LOG - Logging level (optional, default: info)

use forwardflow::{
    config::{Config, SourceConfig},
    notify::{LogNotifier, Notifier},
    source::{fetch_or_notify, FileForwardSource, ForwardSource, HttpForwardSource},
    state::{state_refresh_task, State, StateMessage},
    ui::{renderer, run_ui},
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, RwLock};

fn build_source(config: &SourceConfig) -> Result<Arc<dyn ForwardSource>, Box<dyn std::error::Error>> {
    let source: Arc<dyn ForwardSource> = match config {
        SourceConfig::Http { base_url, token } => Arc::new(HttpForwardSource::new(base_url, token.clone())?),
        SourceConfig::File { path } => Arc::new(FileForwardSource::new(path)),
    };
    Ok(source)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = Config::from_env()?;

    log::info!("🚀 Starting Forward Table");
    match &config.source {
        SourceConfig::Http { base_url, .. } => log::info!("   Source: {}", base_url),
        SourceConfig::File { path } => log::info!("   Source: {}", path),
    }
    log::info!("   Window: {} days", config.days);
    log::info!("   Order: {}", config.order);

    let source = build_source(&config.source)?;
    let notifier: Arc<dyn Notifier> = Arc::new(LogNotifier);

    if config.print_only {
        let events = fetch_or_notify(source.as_ref(), config.days, notifier.as_ref()).await;
        let table = forwardflow::build_table(&events, config.order);
        for line in renderer::render_plain(&table, &config.formatter, 20) {
            println!("{}", line);
        }
        return Ok(());
    }

    let (tx, rx) = mpsc::channel::<StateMessage>(32);
    let state = Arc::new(RwLock::new(State::new(config.days, config.order)));

    let refresh_handle = tokio::spawn(state_refresh_task(rx, state.clone(), source, notifier));
    tx.send(StateMessage::Refresh { days: config.days }).await?;

    if let Err(e) = run_ui(
        state,
        tx,
        config.formatter.clone(),
        Duration::from_millis(config.ui_refresh_ms),
    )
    .await
    {
        log::error!("UI error: {}", e);
    }

    if let Err(e) = refresh_handle.await {
        log::error!("Refresh task failed: {}", e);
    }

    log::info!("✅ Forward Table exited");
    Ok(())
}
