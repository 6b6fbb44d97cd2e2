use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use qwatch_feed::{FeedClient, FeedSource};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

mod app;
mod config;
mod logging;
mod refresh;
mod trigger;

use app::Dashboard;
use config::Args;
use trigger::{Trigger, spawn_manual_input, spawn_timer};

async fn run(args: Args) -> anyhow::Result<()> {
    let source = FeedSource::from_base(&args.base, args.timeout())
        .context("Failed to set up the data source")?;
    let client = FeedClient::builder()
        .source(source)
        .snapshot_path(args.snapshot_path.as_str())
        .history_path(args.history_path.as_str())
        .build();

    let dashboard = Dashboard::new(client, args.history_limit, !args.once);

    if args.once {
        dashboard
            .refresh(Trigger::Initial)
            .await
            .context("Refresh failed")?;
        dashboard.print(Trigger::Initial);
        return Ok(());
    }

    tracing::info!(
        base = %args.base,
        interval_secs = args.interval_secs,
        "Watching board, press Enter to refresh or q to quit"
    );

    let cancel = CancellationToken::new();
    let (tx, rx) = mpsc::channel(16);

    let timer = spawn_timer(args.interval(), tx.clone(), cancel.clone());
    let _input = spawn_manual_input(tokio::io::stdin(), tx, cancel.clone());

    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupted, shutting down");
            shutdown.cancel();
        }
    });

    dashboard.run(rx, cancel.clone()).await;

    cancel.cancel();
    timer.await.context("Refresh timer failed")?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let args = Args::parse();
    logging::init_logging();

    let rt = tokio::runtime::Runtime::new().context("Failed to start the async runtime")?;
    let result = rt.block_on(run(args));

    // stdin is read on a blocking thread that cannot be interrupted
    rt.shutdown_background();

    result
}
