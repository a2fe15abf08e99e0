use std::time::{Duration, Instant};

use tracing::{debug, error, info};

use crate::config::{MAX_POLL_INTERVAL_MS, SubscriberSettings};
use crate::subscriber::StopSignal;
use crate::transport::{Connection, Endpoint, Received};
use crate::utils::error::{Result, TransportError};

/// Owns one SUB socket, subscribed to exactly one topic prefix.
pub struct Subscriber {
    settings: SubscriberSettings,
    connection: Connection,
}

impl Subscriber {
    pub fn new(settings: SubscriberSettings) -> Self {
        Self {
            settings,
            connection: Connection::Disconnected,
        }
    }

    pub fn settings(&self) -> &SubscriberSettings {
        &self.settings
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    /// Creates the context and SUB socket, connects and subscribes.
    ///
    /// On failure the subscriber stays disconnected. Connecting a connected
    /// subscriber does nothing.
    pub fn connect(&mut self) -> Result<()> {
        if self.is_connected() {
            return Ok(());
        }

        match self.open() {
            Ok((connection, endpoint)) => {
                self.connection = connection;
                info!(
                    "Connected to ZeroMQ publisher at {} for topic '{}'",
                    endpoint.address(),
                    self.settings.topic
                );
                Ok(())
            }
            Err(e) => {
                error!("ZeroMQ connection error: {}", e);
                Err(e)
            }
        }
    }

    fn open(&self) -> Result<(Connection, Endpoint)> {
        let endpoint = Endpoint::tcp(&self.settings.host, self.settings.port)?;
        let (context, socket) = Connection::open(zmq::SUB)?;
        socket
            .connect(&endpoint.to_string())
            .map_err(|source| TransportError::Connect {
                endpoint: endpoint.to_string(),
                source,
            })?;
        socket
            .set_subscribe(self.settings.topic.as_bytes())
            .map_err(TransportError::Subscribe)?;

        Ok((Connection::Connected { context, socket }, endpoint))
    }

    /// Waits up to `timeout` for one frame.
    ///
    /// `Ok(None)` means nothing arrived in time, or a signal cut the wait short.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<Received>> {
        let socket = self.connection.socket()?;

        let mut items = [socket.as_poll_item(zmq::POLLIN)];
        let timeout_ms = i64::try_from(timeout.as_millis()).unwrap_or(i64::MAX);
        match zmq::poll(&mut items, timeout_ms) {
            Ok(_) => {}
            Err(zmq::Error::EINTR) => return Ok(None),
            Err(e) => return Err(TransportError::Receive(e)),
        }
        if !items[0].is_readable() {
            return Ok(None);
        }

        match socket.recv_bytes(zmq::DONTWAIT) {
            Ok(frame) => Ok(Some(Received::new(frame))),
            Err(zmq::Error::EAGAIN) | Err(zmq::Error::EINTR) => Ok(None),
            Err(e) => Err(TransportError::Receive(e)),
        }
    }

    /// Logs every received frame until the transport fails or `stop` fires.
    pub fn receive_loop(&mut self, stop: &StopSignal) -> Result<()> {
        self.receive_loop_with(stop, |message| {
            info!("Received message from topic: {}", message.text());
        })
    }

    /// Hands every received frame to `on_message` until the transport fails
    /// or `stop` fires.
    ///
    /// Always ends with an error (`Interrupted` for a stop), and always
    /// closes the socket before returning.
    pub fn receive_loop_with<F>(&mut self, stop: &StopSignal, mut on_message: F) -> Result<()>
    where
        F: FnMut(&Received),
    {
        let poll_interval =
            Duration::from_millis(self.settings.poll_interval_ms.clamp(1, MAX_POLL_INTERVAL_MS));
        let started = Instant::now();

        let outcome = loop {
            if stop.is_triggered() {
                break TransportError::Interrupted;
            }
            match self.recv_timeout(poll_interval) {
                Ok(Some(message)) => on_message(&message),
                Ok(None) => {}
                Err(e) => break e,
            }
        };

        error!("ZeroMQ receive error: {}", outcome);
        debug!("Receive loop ran for {:?}", started.elapsed());
        self.close();
        Err(outcome)
    }

    /// Releases the socket and context. Failures are logged, never raised.
    pub fn close(&mut self) {
        match self.connection.close() {
            Some(Ok(())) => info!("ZeroMQ connection closed."),
            Some(Err(e)) => error!("ZeroMQ close error: {}", e),
            None => {}
        }
    }
}

impl Drop for Subscriber {
    fn drop(&mut self) {
        self.close();
    }
}
