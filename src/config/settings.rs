use serde::Deserialize;

/// Top-level configuration settings for the application.
///
/// Includes settings for the notification hub and for logging.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub hub: HubSettings,
    pub log: LogSettings,
}

/// Configuration settings for the notification hub.
///
/// Controls delivery buffering and the resource limits enforced at subscribe
/// time.
#[derive(Debug, Deserialize, Clone)]
pub struct HubSettings {
    /// Buffered capacity of each subscriber channel. A subscriber that falls
    /// this many events behind starts losing events.
    pub channel_capacity: usize,
    /// Maximum number of live subscribers one `(entity, topic)` bucket
    /// accepts.
    pub max_subscribers_per_topic: usize,
    /// How many subscriber ids are drawn before giving up on a collision.
    pub id_retry_attempts: usize,
}

/// Configuration settings for logging.
#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled
/// using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub hub: Option<PartialHubSettings>,
    pub log: Option<PartialLogSettings>,
}

/// Partial hub settings.
///
/// Used when loading hub configuration from external sources with optional
/// values.
#[derive(Debug, Deserialize)]
pub struct PartialHubSettings {
    pub channel_capacity: Option<usize>,
    pub max_subscribers_per_topic: Option<usize>,
    pub id_retry_attempts: Option<usize>,
}

/// Partial logging settings.
#[derive(Debug, Deserialize)]
pub struct PartialLogSettings {
    pub level: Option<String>,
}

impl Settings {
    /// Fills every value missing from `partial` with its default.
    pub fn merged(partial: PartialSettings) -> Self {
        let default = Settings::default();

        Settings {
            hub: HubSettings {
                channel_capacity: partial
                    .hub
                    .as_ref()
                    .and_then(|h| h.channel_capacity)
                    .unwrap_or(default.hub.channel_capacity),
                max_subscribers_per_topic: partial
                    .hub
                    .as_ref()
                    .and_then(|h| h.max_subscribers_per_topic)
                    .unwrap_or(default.hub.max_subscribers_per_topic),
                id_retry_attempts: partial
                    .hub
                    .as_ref()
                    .and_then(|h| h.id_retry_attempts)
                    .unwrap_or(default.hub.id_retry_attempts),
            },
            log: LogSettings {
                level: partial
                    .log
                    .as_ref()
                    .and_then(|l| l.level.clone())
                    .unwrap_or(default.log.level),
            },
        }
    }
}

/// Provides default values for `HubSettings`.
impl Default for HubSettings {
    fn default() -> Self {
        Self {
            channel_capacity: 64,
            max_subscribers_per_topic: 1024,
            id_retry_attempts: 4,
        }
    }
}

/// Provides default values for `LogSettings`.
impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Provides default values for `Settings`.
///
/// Ensures the application has sensible defaults if no configuration is
/// provided.
impl Default for Settings {
    fn default() -> Self {
        Self {
            hub: HubSettings::default(),
            log: LogSettings::default(),
        }
    }
}
