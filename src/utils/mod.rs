//! The `utils` module provides the pieces shared by both roles: the transport
//! error type and logging initialisation.

pub mod error;
pub mod logging;
