use std::mem;

use crate::utils::error::{Result, TransportError};

/// Socket state owned by one role.
///
/// A role starts `Disconnected`, becomes `Connected` after a successful
/// bind or connect, and returns to `Disconnected` on close. The socket is
/// only reachable through `socket()`, which fails once the role is closed.
#[derive(Default)]
pub enum Connection {
    #[default]
    Disconnected,
    Connected {
        context: zmq::Context,
        socket: zmq::Socket,
    },
}

impl Connection {
    /// Creates a fresh context and a socket of the given pattern. The pair is
    /// only stored once the caller has bound or connected it.
    pub fn open(kind: zmq::SocketType) -> Result<(zmq::Context, zmq::Socket)> {
        let context = zmq::Context::new();
        let socket = context.socket(kind).map_err(TransportError::Socket)?;
        Ok((context, socket))
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Connection::Connected { .. })
    }

    pub fn socket(&self) -> Result<&zmq::Socket> {
        match self {
            Connection::Connected { socket, .. } => Ok(socket),
            Connection::Disconnected => Err(TransportError::NotConnected),
        }
    }

    /// Releases the socket, then terminates the context.
    ///
    /// Returns `None` when there was nothing to close, so a second call is a no-op.
    pub fn close(&mut self) -> Option<std::result::Result<(), zmq::Error>> {
        match mem::take(self) {
            Connection::Connected {
                mut context,
                socket,
            } => {
                drop(socket);
                Some(context.destroy())
            }
            Connection::Disconnected => None,
        }
    }
}
