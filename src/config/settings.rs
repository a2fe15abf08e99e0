use serde::Deserialize;

/// Top-level configuration settings for the application.
///
/// Includes settings for both roles and for logging.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub publisher: PublisherSettings,
    pub subscriber: SubscriberSettings,
    pub logging: LoggingSettings,
}

/// Configuration settings for the publisher.
///
/// `host` is the interface the PUB socket binds to: `127.0.0.1` for loopback,
/// `*` or `0.0.0.0` for all interfaces.
#[derive(Debug, Deserialize, Clone)]
pub struct PublisherSettings {
    pub host: String,
    pub port: u16,
    /// How long undelivered frames may hold up `close`, in milliseconds.
    pub linger_ms: i32,
}

/// Configuration settings for the subscriber.
#[derive(Debug, Deserialize, Clone)]
pub struct SubscriberSettings {
    pub host: String,
    pub port: u16,
    /// Topic prefix to subscribe to. Empty subscribes to everything.
    pub topic: String,
    /// Granularity at which the receive loop notices an interrupt.
    pub poll_interval_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values are filled from defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub publisher: Option<PartialPublisherSettings>,
    pub subscriber: Option<PartialSubscriberSettings>,
    pub logging: Option<PartialLoggingSettings>,
}

#[derive(Debug, Deserialize)]
pub struct PartialPublisherSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub linger_ms: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct PartialSubscriberSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub topic: Option<String>,
    pub poll_interval_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct PartialLoggingSettings {
    pub level: Option<String>,
}

pub const DEFAULT_PORT: u16 = 5555;

/// Upper bound on `poll_interval_ms`. Longer slices would delay noticing an interrupt.
pub const MAX_POLL_INTERVAL_MS: u64 = 1000;

impl Default for Settings {
    fn default() -> Self {
        Self {
            publisher: PublisherSettings::default(),
            subscriber: SubscriberSettings::default(),
            logging: LoggingSettings {
                level: "info".to_string(),
            },
        }
    }
}

impl Default for PublisherSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            linger_ms: 1000,
        }
    }
}

impl Default for SubscriberSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            topic: String::new(),
            poll_interval_ms: 100,
        }
    }
}

impl PartialSettings {
    /// Fills every missing value from `Settings::default()`.
    pub fn merge_with_defaults(self) -> Settings {
        let default = Settings::default();
        let publisher = self.publisher;
        let subscriber = self.subscriber;

        Settings {
            publisher: PublisherSettings {
                host: publisher
                    .as_ref()
                    .and_then(|p| p.host.clone())
                    .unwrap_or(default.publisher.host),
                port: publisher
                    .as_ref()
                    .and_then(|p| p.port)
                    .unwrap_or(default.publisher.port),
                linger_ms: publisher
                    .as_ref()
                    .and_then(|p| p.linger_ms)
                    .unwrap_or(default.publisher.linger_ms),
            },
            subscriber: SubscriberSettings {
                host: subscriber
                    .as_ref()
                    .and_then(|s| s.host.clone())
                    .unwrap_or(default.subscriber.host),
                port: subscriber
                    .as_ref()
                    .and_then(|s| s.port)
                    .unwrap_or(default.subscriber.port),
                topic: subscriber
                    .as_ref()
                    .and_then(|s| s.topic.clone())
                    .unwrap_or(default.subscriber.topic),
                poll_interval_ms: subscriber
                    .as_ref()
                    .and_then(|s| s.poll_interval_ms)
                    .unwrap_or(default.subscriber.poll_interval_ms)
                    .clamp(1, MAX_POLL_INTERVAL_MS),
            },
            logging: LoggingSettings {
                level: self
                    .logging
                    .and_then(|l| l.level)
                    .unwrap_or(default.logging.level),
            },
        }
    }
}
