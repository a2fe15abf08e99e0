//! The `error` module defines the error type shared by the publisher and the
//! subscriber. Every failure of the underlying ZeroMQ library is mapped into a
//! `TransportError` that carries the library's cause.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    /// The role has no open socket: never set up, or already closed.
    #[error("ZeroMQ socket is not available")]
    NotConnected,

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("failed to create socket: {0}")]
    Socket(#[source] zmq::Error),

    #[error("failed to configure socket: {0}")]
    SocketOption(#[source] zmq::Error),

    #[error("failed to bind {endpoint}: {source}")]
    Bind {
        endpoint: String,
        #[source]
        source: zmq::Error,
    },

    #[error("failed to connect to {endpoint}: {source}")]
    Connect {
        endpoint: String,
        #[source]
        source: zmq::Error,
    },

    #[error("failed to subscribe: {0}")]
    Subscribe(#[source] zmq::Error),

    #[error("failed to send: {0}")]
    Send(#[source] zmq::Error),

    #[error("failed to receive: {0}")]
    Receive(#[source] zmq::Error),

    #[error("interrupted")]
    Interrupted,
}

pub type Result<T> = std::result::Result<T, TransportError>;
