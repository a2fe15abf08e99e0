//! # zmqbus
//!
//! `zmqbus` wraps the two halves of a ZeroMQ publish/subscribe link: a
//! publisher that binds a PUB socket and sends `"<topic> <data>"` frames, and
//! a subscriber that connects a SUB socket to one topic prefix and logs what
//! it receives. Framing, filtering and delivery belong to ZeroMQ.
//!
//! ## Core Modules
//!
//! - `publisher`: binds, publishes and closes a PUB socket.
//! - `subscriber`: connects a SUB socket and runs the receive loop.
//! - `transport`: endpoints, the frame convention and the socket state shared by both roles.
//! - `config`: loads settings from `config/default`, `.env` and the environment.
//! - `utils`: the transport error type and logging setup.

pub mod config;
pub mod publisher;
pub mod subscriber;
pub mod transport;
pub mod utils;
