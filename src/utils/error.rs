//! Error types raised by the notification hub.
//!
//! Publishing never fails: an event for an entity nobody subscribed to, or
//! for a subscriber that is already gone, is simply not delivered. The only
//! fallible operation is subscribing, and only for resource exhaustion or a
//! hub that has already been shut down. Resolvers surface these as a generic
//! subscription-setup failure to the client.

use thiserror::Error;

use crate::hub::topic::Topic;

/// Errors returned by [`Hub::subscribe`](crate::hub::Hub::subscribe).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum HubError {
    /// The topic bucket already holds the configured maximum number of
    /// subscribers.
    #[error("subscriber limit for {topic} reached (max {max})")]
    SubscriberLimit {
        /// The topic that is full.
        topic: Topic,
        /// The configured limit.
        max: usize,
    },

    /// No unique subscriber id could be drawn within the retry budget.
    #[error("could not draw a unique subscriber id in {attempts} attempt(s)")]
    SubscriberIdExhausted {
        /// How many ids were drawn before giving up.
        attempts: usize,
    },

    /// The hub has been shut down; no new subscriptions are accepted.
    #[error("hub is shut down")]
    ShutDown,
}
