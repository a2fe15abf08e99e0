use std::fmt;

use crate::utils::error::{Result, TransportError};

/// A `tcp://host:port` address for a bind or a connect.
///
/// For binds `host` is an interface: `*` or `0.0.0.0` for all of them.
/// IPv6 literals are written without brackets and bracketed on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Endpoint {
    pub fn tcp(host: &str, port: u16) -> Result<Self> {
        let host = host.trim_start_matches('[').trim_end_matches(']');
        if host.is_empty() {
            return Err(TransportError::InvalidEndpoint("empty host".to_string()));
        }
        if host.chars().any(char::is_whitespace) {
            return Err(TransportError::InvalidEndpoint(format!(
                "host '{host}' contains whitespace"
            )));
        }
        if port == 0 {
            return Err(TransportError::InvalidEndpoint(format!(
                "port 0 on host '{host}'"
            )));
        }

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// `host:port`, the form used in log lines.
    pub fn address(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tcp://{}", self.address())
    }
}
