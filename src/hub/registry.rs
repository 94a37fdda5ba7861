use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::config::HubSettings;
use crate::hub::entity::EntityEntry;
use crate::hub::event::Event;
use crate::hub::stream::{EventStream, Subscription};
use crate::hub::topic::{EntityId, SubscriberId, Topic};
use crate::utils::error::HubError;

/// The process-wide notification hub.
///
/// Mutation resolvers publish events into it after their database write has
/// committed; subscription resolvers register channels on it and hand the
/// resulting stream to the transport layer. The hub keeps one lazily created
/// [`EntityEntry`] per team or user, each with its own lock, so fan-out for
/// one entity never contends with fan-out for another. The hub's own lock is
/// only ever taken to look an entry up or to create a missing one, never
/// while an entity lock is held.
///
/// Authorization is the caller's concern: resolvers check the caller's role
/// in the entity before subscribing or publishing.
#[derive(Debug)]
pub struct Hub {
    entities: RwLock<HashMap<EntityId, Arc<EntityEntry>>>,
    settings: HubSettings,
    shutdown: CancellationToken,
}

impl Hub {
    /// Creates a new hub with the given settings.
    pub fn new(settings: HubSettings) -> Self {
        Self {
            entities: RwLock::new(HashMap::new()),
            settings,
            shutdown: CancellationToken::new(),
        }
    }

    /// Returns the entry for `id`, creating it on first use.
    ///
    /// Double-checked: the common path is a lookup under the read lock, and a
    /// creation race under the write lock resolves to the single entry every
    /// caller observes. Entries live for the rest of the process; the entity
    /// id space is bounded by the number of real teams and users.
    fn entry(&self, id: EntityId) -> Arc<EntityEntry> {
        if let Some(entry) = self.entities.read().unwrap().get(&id) {
            return Arc::clone(entry);
        }
        let mut entities = self.entities.write().unwrap();
        Arc::clone(entities.entry(id).or_default())
    }

    /// Read-only lookup, used by the paths for which a missing entity means
    /// "nothing to do".
    fn peek(&self, id: EntityId) -> Option<Arc<EntityEntry>> {
        self.entities.read().unwrap().get(&id).cloned()
    }

    /// Registers a subscriber on `(entity, topic)` and returns its event
    /// stream.
    ///
    /// The returned stream receives every event published for the pair from
    /// the moment this call returns until the stream closes. A watcher task is
    /// bound to `ctx`: when the transport layer cancels it (the client
    /// disconnected) the subscriber is unregistered and its channel closed,
    /// exactly once. Hub shutdown tears the subscription down the same way.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// Fails only when the hub is already shut down or on resource
    /// exhaustion; see [`HubError`].
    pub fn subscribe(
        &self,
        ctx: CancellationToken,
        entity: EntityId,
        topic: Topic,
    ) -> Result<Subscription, HubError> {
        if self.shutdown.is_cancelled() {
            return Err(HubError::ShutDown);
        }

        let entry = self.entry(entity);
        let (id, rx) = entry.subscribe(topic, &self.settings)?;
        debug!("{entity} gained subscriber {id} on {topic}");

        // Watcher: converts the subscription's cancellation into the one
        // unsubscribe call. It holds no lock while waiting.
        let watcher_entry = Arc::clone(&entry);
        let watcher_id = id.clone();
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = ctx.cancelled() => {}
                _ = shutdown.cancelled() => {}
            }
            if watcher_entry.unsubscribe(topic, &watcher_id) {
                debug!("{entity} dropped subscriber {watcher_id} on {topic}");
            }
        });

        Ok(Subscription {
            id,
            events: EventStream::new(rx),
        })
    }

    /// Unregisters a subscriber and closes its channel.
    ///
    /// Idempotent: unsubscribing an id that is already gone (or was never
    /// registered) is a no-op. The watcher task calls this on cancellation;
    /// callers may also invoke it directly, and the two racing is fine.
    pub fn unsubscribe(&self, entity: EntityId, topic: Topic, id: &SubscriberId) {
        if let Some(entry) = self.peek(entity) {
            if entry.unsubscribe(topic, id) {
                debug!("{entity} dropped subscriber {id} on {topic}");
            }
        }
    }

    /// Fans `payload` out to every current subscriber of `(entity, topic)`.
    ///
    /// Publishing to an entity nobody ever subscribed to is a no-op, not an
    /// error. Delivery never blocks on consumers: each subscriber channel is
    /// buffered and a full buffer drops the event for that subscriber only.
    /// Because the fan-out loop runs under the entity's lock, all subscribers
    /// observe a single publisher's events in publish order.
    pub fn publish(&self, entity: EntityId, topic: Topic, payload: Value) {
        let Some(entry) = self.peek(entity) else {
            trace!("no subscribers registered for {entity}, dropping {topic} event");
            return;
        };

        let event = Event::new(topic, payload);
        let delivered = entry.fan_out(topic, &event);
        trace!("delivered {topic} event on {entity} to {delivered} subscriber(s)");
    }

    /// Fire-and-forget [`publish`](Hub::publish), detached from the calling
    /// request path. This is the form mutation resolvers use after a commit.
    pub fn spawn_publish(self: Arc<Self>, entity: EntityId, topic: Topic, payload: Value) {
        tokio::spawn(async move {
            self.publish(entity, topic, payload);
        });
    }

    /// Shuts the hub down: releases every watcher task and closes every
    /// subscriber channel, ending all outstanding event streams.
    ///
    /// Idempotent. Later [`subscribe`](Hub::subscribe) calls fail with
    /// [`HubError::ShutDown`].
    pub fn shutdown(&self) {
        self.shutdown.cancel();

        let entries: Vec<Arc<EntityEntry>> = {
            let entities = self.entities.read().unwrap();
            entities.values().map(Arc::clone).collect()
        };
        let mut closed = 0;
        for entry in entries {
            closed += entry.close_all();
        }
        debug!("hub shut down, closed {closed} subscriber channel(s)");
    }

    /// Number of live subscribers on `(entity, topic)`.
    pub fn subscriber_count(&self, entity: EntityId, topic: Topic) -> usize {
        self.peek(entity)
            .map_or(0, |entry| entry.subscriber_count(topic))
    }

    /// Number of entity entries ever touched. Entries are retained for the
    /// process lifetime, so this is a monitored growth figure.
    pub fn entity_count(&self) -> usize {
        self.entities.read().unwrap().len()
    }
}

impl Default for Hub {
    fn default() -> Self {
        Self::new(HubSettings::default())
    }
}
