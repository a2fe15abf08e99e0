//! The `transport` module holds what both roles share on top of the ZeroMQ
//! library: TCP endpoint addressing, the `"<topic> <data>"` frame convention,
//! and the tagged socket state that replaces a nullable socket handle.

pub mod connection;
pub mod endpoint;
pub mod message;

pub use connection::Connection;
pub use endpoint::Endpoint;
pub use message::{Received, encode_frame};
