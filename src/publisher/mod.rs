//! The `publisher` module binds a PUB socket and sends `"<topic> <data>"`
//! frames on it. Delivery, fan-out and topic filtering are left to ZeroMQ.

pub mod zmq_publisher;

pub use zmq_publisher::Publisher;

#[cfg(test)]
mod tests;
