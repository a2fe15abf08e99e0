//! The `subscriber` module connects a SUB socket to a publisher, filters on a
//! single topic prefix and logs every frame it receives until the transport
//! fails or the process is interrupted.

pub mod signal;
pub mod zmq_subscriber;

pub use signal::StopSignal;
pub use zmq_subscriber::Subscriber;

use tracing::error;

use crate::config::SubscriberSettings;
use crate::utils::error::Result;

/// Connects, then logs received frames until an error or `stop` ends the loop.
///
/// The socket is closed on every path out of the loop. Failures are only
/// logged; the returned error tells the caller how the run ended.
pub fn receive(settings: SubscriberSettings, stop: &StopSignal) -> Result<()> {
    let mut subscriber = Subscriber::new(settings);
    if let Err(e) = subscriber.connect() {
        error!("Failed to connect to ZeroMQ publisher");
        return Err(e);
    }
    subscriber.receive_loop(stop)
}

#[cfg(test)]
mod tests;
