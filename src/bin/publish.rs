//! ZeroMQ publisher CLI
//!
//! Binds a PUB socket and publishes every line read from stdin on one topic,
//! then closes the socket at end of input.

use std::io::{self, BufRead};

use clap::Parser;
use tracing::error;
use zmqbus::config::load_config;
use zmqbus::publisher::Publisher;
use zmqbus::utils::logging;

#[derive(Parser)]
#[command(name = "zmqbus-publish", about = "ZeroMQ publisher")]
struct Args {
    /// Port to bind. Defaults to 5555.
    #[arg(long)]
    zeromq_port: Option<u16>,

    /// Topic every line is published on.
    #[arg(long)]
    zeromq_topic: String,

    /// Interface to bind: 127.0.0.1 (default), or * for all interfaces.
    #[arg(long)]
    zeromq_host: Option<String>,

    /// error, warn, info, debug or trace.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
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
        config.publisher.port = port;
    }
    if let Some(host) = args.zeromq_host {
        config.publisher.host = host;
    }

    let mut publisher = Publisher::new(config.publisher);
    if publisher.setup().is_err() {
        return;
    }

    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) => {
                if publisher.publish(&args.zeromq_topic, &line).is_err() {
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    publisher.close();
}
