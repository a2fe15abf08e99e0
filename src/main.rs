//! ZeroMQ subscriber CLI
//!
//! Connects to a publisher, subscribes to one topic and logs every message
//! until the connection fails or Ctrl-C is pressed.

use clap::Parser;
use tracing::{error, info};
use zmqbus::config::load_config;
use zmqbus::subscriber::{self, StopSignal};
use zmqbus::utils::logging;

#[derive(Parser)]
#[command(name = "zmqbus", about = "ZeroMQ receiver")]
struct Args {
    /// Specify ZeroMQ subscriber port. Defaults to 5555.
    #[arg(long)]
    zeromq_port: Option<u16>,

    /// Specify ZeroMQ subscriber topic. Required! An empty topic receives everything.
    #[arg(long)]
    zeromq_topic: String,

    /// Host of the publisher. Defaults to 127.0.0.1.
    #[arg(long)]
    zeromq_host: Option<String>,

    /// error, warn, info, debug or trace.
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            logging::init("info");
            error!("Failed to load configuration: {}", e);
            return;
        }
    };
    logging::init(args.log_level.as_deref().unwrap_or(&config.logging.level));

    if let Some(port) = args.zeromq_port {
        config.subscriber.port = port;
    }
    if let Some(host) = args.zeromq_host {
        config.subscriber.host = host;
    }
    config.subscriber.topic = args.zeromq_topic;

    let stop = StopSignal::new();
    {
        let stop = stop.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown signal received.");
                stop.trigger();
            }
        });
    }

    let settings = config.subscriber;
    let worker = tokio::task::spawn_blocking(move || subscriber::receive(settings, &stop));
    if let Err(e) = worker.await {
        error!("Receive loop panicked: {}", e);
    }
}
