use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::hub::topic::Topic;

/// A single notification delivered to every live subscriber of a topic.
///
/// The payload is whatever the publishing mutation constructed: a resolved
/// entity view for `*Added`/`*Updated`/`*Created` events, or a bare identifier
/// for removals. The hub never inspects it; it is handed to every subscriber
/// unchanged.
///
/// This structure is serialized to JSON when the transport layer turns a
/// delivered event into a subscription frame.
///
/// # Fields
///
/// - `topic` - The topic this event was published on.
/// - `payload` - The opaque event content, as resolver-produced JSON.
/// - `timestamp` - Unix timestamp (in seconds) at which the hub accepted the event.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub topic: Topic,
    pub payload: Value,
    pub timestamp: i64,
}

impl Event {
    /// Stamps a new event for `topic` carrying `payload`.
    pub fn new(topic: Topic, payload: Value) -> Self {
        Self {
            topic,
            payload,
            timestamp: Utc::now().timestamp(),
        }
    }
}
