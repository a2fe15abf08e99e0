use tracing::{error, info};

use crate::config::PublisherSettings;
use crate::transport::{Connection, Endpoint, encode_frame};
use crate::utils::error::{Result, TransportError};

/// Owns one PUB socket and its context.
///
/// A publisher is created disconnected; `setup` binds it and `close` (or
/// dropping it) releases it. `publish` outside that window is refused.
pub struct Publisher {
    settings: PublisherSettings,
    connection: Connection,
}

impl Publisher {
    pub fn new(settings: PublisherSettings) -> Self {
        Self {
            settings,
            connection: Connection::Disconnected,
        }
    }

    pub fn settings(&self) -> &PublisherSettings {
        &self.settings
    }

    pub fn is_bound(&self) -> bool {
        self.connection.is_connected()
    }

    /// Binds the PUB socket to the configured interface and port.
    ///
    /// A failure is logged and returned; there is no retry. Calling `setup`
    /// on a bound publisher does nothing.
    pub fn setup(&mut self) -> Result<()> {
        if self.is_bound() {
            return Ok(());
        }

        match self.bind() {
            Ok(connection) => {
                self.connection = connection;
                info!("ZeroMQ server started on port {}", self.settings.port);
                Ok(())
            }
            Err(e) => {
                error!("ZeroMQ connection error: {}", e);
                Err(e)
            }
        }
    }

    fn bind(&self) -> Result<Connection> {
        let endpoint = Endpoint::tcp(&self.settings.host, self.settings.port)?;
        let (context, socket) = Connection::open(zmq::PUB)?;
        socket
            .set_linger(self.settings.linger_ms)
            .map_err(TransportError::SocketOption)?;
        socket
            .bind(&endpoint.to_string())
            .map_err(|source| TransportError::Bind {
                endpoint: endpoint.to_string(),
                source,
            })?;

        Ok(Connection::Connected { context, socket })
    }

    /// Sends `"<topic> <data>"` as a single frame.
    pub fn publish(&self, topic: &str, data: &str) -> Result<()> {
        let socket = match self.connection.socket() {
            Ok(socket) => socket,
            Err(e) => {
                error!("ZeroMQ socket is not available for publishing");
                return Err(e);
            }
        };

        let frame = encode_frame(topic, data);
        if let Err(e) = socket.send(frame.as_bytes(), 0) {
            error!("ZeroMQ publish error on topic {}: {}", topic, e);
            return Err(TransportError::Send(e));
        }

        info!("Published data to ZeroMQ topic: {}", topic);
        Ok(())
    }

    /// Releases the socket and terminates the context. Safe to call twice.
    pub fn close(&mut self) {
        match self.connection.close() {
            Some(Ok(())) => info!("ZeroMQ connection closed."),
            Some(Err(e)) => error!("ZeroMQ close error: {}", e),
            None => {}
        }
    }
}

impl Drop for Publisher {
    fn drop(&mut self) {
        self.close();
    }
}
