//! # Teamcast
//!
//! `teamcast` is the real-time notification hub of a collaborative
//! API-testing backend. Teams share collections, requests, members,
//! invitations and environments; when a mutation commits a change to one of
//! them, the hub fans a live event out to every GraphQL subscription
//! currently open for the affected team or user.
//!
//! Mutation resolvers call [`Hub::publish`] (or its fire-and-forget form,
//! [`Hub::spawn_publish`]) after their database write. Subscription resolvers
//! call [`Hub::subscribe`] and hand the returned [`EventStream`] to the
//! transport layer, which streams each event to the client until the client
//! disconnects and its cancellation token tears the subscription down.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct responsibility:
//!
//! - `hub`: The central component that manages entity entries, topic buckets,
//!   subscriber channels and event fan-out.
//! - `config`: Handles loading and managing hub configuration.
//! - `utils`: Contains shared utilities, such as error handling and logging setup.

pub mod config;
pub mod hub;
pub mod utils;

pub use config::{HubSettings, Settings};
pub use hub::event::Event;
pub use hub::registry::Hub;
pub use hub::stream::{EventStream, Subscription};
pub use hub::topic::{EntityId, SubscriberId, Topic};
pub use utils::error::HubError;

#[cfg(test)]
mod tests;
