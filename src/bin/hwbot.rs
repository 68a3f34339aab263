//! hwbot CLI — homework review status notifier daemon.

use clap::Parser;
use hwbot::api::PracticumClient;
use hwbot::config::Config;
use hwbot::notify::Notifier;
use hwbot::poller::Poller;
use hwbot::telemetry::init_logging;
use std::path::PathBuf;
use std::time::Duration;
use tracing::error;

#[derive(Parser)]
#[command(name = "hwbot", about = "Telegram notifier for homework review status")]
struct Cli {
    /// Seconds to sleep between poll cycles
    #[arg(long, default_value_t = 600)]
    interval: u64,

    /// Append-mode log file, written in addition to stdout
    #[arg(long, default_value = "hwbot.log")]
    log_file: PathBuf,

    /// Log to stdout only
    #[arg(long)]
    no_log_file: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let log_file = (!cli.no_log_file).then_some(cli.log_file.as_path());
    init_logging(log_file)?;

    // Missing credentials terminate before the loop starts. No chat
    // notification is possible at this point.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}; stopping");
            anyhow::bail!("{e}");
        }
    };

    let api = PracticumClient::new(config.practicum_token);
    let notifier = Notifier::new(config.telegram_token, config.telegram_chat_id);
    let mut poller = Poller::new(api, notifier, Duration::from_secs(cli.interval));

    let shutdown = poller.shutdown_handle();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        shutdown.notify_one();
    });

    poller.run().await;
    Ok(())
}
