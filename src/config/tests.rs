use serial_test::serial;

use super::load_config;
use super::settings::{PartialHubSettings, PartialSettings, Settings};

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.hub.channel_capacity, 64);
    assert_eq!(settings.hub.max_subscribers_per_topic, 1024);
    assert_eq!(settings.hub.id_retry_attempts, 4);
    assert_eq!(settings.log.level, "info");
}

#[test]
fn test_merge_keeps_given_values() {
    let partial = PartialSettings {
        hub: Some(PartialHubSettings {
            channel_capacity: Some(8),
            max_subscribers_per_topic: None,
            id_retry_attempts: None,
        }),
        log: None,
    };

    let settings = Settings::merged(partial);
    assert_eq!(settings.hub.channel_capacity, 8);
    assert_eq!(settings.hub.max_subscribers_per_topic, 1024);
    assert_eq!(settings.log.level, "info");
}

#[test]
#[serial]
fn test_env_overrides_log_level() {
    temp_env::with_var("LOG__LEVEL", Some("debug"), || {
        let settings = load_config().expect("config should load");
        assert_eq!(settings.log.level, "debug");
    });
}

#[test]
#[serial]
fn test_env_overrides_channel_capacity() {
    temp_env::with_var("HUB__CHANNEL_CAPACITY", Some("4"), || {
        let settings = load_config().expect("config should load");
        assert_eq!(settings.hub.channel_capacity, 4);
        // Everything not set keeps its default.
        assert_eq!(settings.hub.max_subscribers_per_topic, 1024);
    });
}
