use std::collections::HashMap;
use std::sync::Mutex;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

use crate::config::HubSettings;
use crate::hub::event::Event;
use crate::hub::topic::{SubscriberId, Topic, new_subscriber_id};
use crate::utils::error::HubError;

/// The live subscriber channels for one topic within one entity.
///
/// Each entry maps a subscriber id to the sending half of that subscriber's
/// bounded channel. Dropping a sender is what closes the channel, so removal
/// from the map and closure are always the same operation.
#[derive(Debug, Default)]
pub(crate) struct TopicBucket {
    subscribers: HashMap<SubscriberId, mpsc::Sender<Event>>,
}

impl TopicBucket {
    fn insert(&mut self, id: SubscriberId, sender: mpsc::Sender<Event>) {
        self.subscribers.insert(id, sender);
    }

    fn remove(&mut self, id: &SubscriberId) -> bool {
        self.subscribers.remove(id).is_some()
    }

    fn contains(&self, id: &SubscriberId) -> bool {
        self.subscribers.contains_key(id)
    }

    fn len(&self) -> usize {
        self.subscribers.len()
    }
}

/// All topic buckets belonging to one entity, guarded by that entity's own
/// lock.
///
/// The lock covers every mutation of the buckets as well as fan-out. A
/// subscriber is therefore never observed half-removed: a concurrent publish
/// either sees the channel fully present or already gone, and a concurrent
/// subscribe joins the bucket fully before or fully after a fan-out, never in
/// the middle of one. Entries for different entities carry independent locks,
/// so activity on one team never contends with another.
#[derive(Debug, Default)]
pub(crate) struct EntityEntry {
    topics: Mutex<HashMap<Topic, TopicBucket>>,
}

impl EntityEntry {
    /// Registers a new subscriber channel for `topic` and returns its id
    /// together with the receiving half.
    ///
    /// Fails only on resource exhaustion: a full bucket, or no unique id
    /// within the retry budget.
    pub(crate) fn subscribe(
        &self,
        topic: Topic,
        settings: &HubSettings,
    ) -> Result<(SubscriberId, mpsc::Receiver<Event>), HubError> {
        let mut topics = self.topics.lock().unwrap();
        let bucket = topics.entry(topic).or_default();

        if bucket.len() >= settings.max_subscribers_per_topic {
            return Err(HubError::SubscriberLimit {
                topic,
                max: settings.max_subscribers_per_topic,
            });
        }

        let mut id = new_subscriber_id();
        let mut attempts = 1;
        while bucket.contains(&id) {
            if attempts >= settings.id_retry_attempts {
                return Err(HubError::SubscriberIdExhausted { attempts });
            }
            id = new_subscriber_id();
            attempts += 1;
        }

        // A zero capacity would make the channel constructor panic.
        let (tx, rx) = mpsc::channel(settings.channel_capacity.max(1));
        bucket.insert(id.clone(), tx);
        Ok((id, rx))
    }

    /// Removes `id` from `topic`'s bucket, closing its channel.
    ///
    /// Idempotent: a second call for the same id is a no-op. Returns whether
    /// the subscriber was still present.
    pub(crate) fn unsubscribe(&self, topic: Topic, id: &SubscriberId) -> bool {
        let mut topics = self.topics.lock().unwrap();
        match topics.get_mut(&topic) {
            Some(bucket) => bucket.remove(id),
            None => false,
        }
    }

    /// Delivers `event` to every current subscriber of `topic` and returns how
    /// many received it.
    ///
    /// Delivery is non-blocking: a subscriber whose buffer is full has this
    /// event dropped, and one whose receiver is already gone is skipped. A
    /// slow consumer can therefore only ever lose its own events, not stall
    /// anyone else's.
    pub(crate) fn fan_out(&self, topic: Topic, event: &Event) -> usize {
        let topics = self.topics.lock().unwrap();
        let Some(bucket) = topics.get(&topic) else {
            return 0;
        };

        let mut delivered = 0;
        for (id, channel) in &bucket.subscribers {
            match channel.try_send(event.clone()) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Full(_)) => {
                    warn!("dropping {topic} event for slow subscriber {id}");
                }
                Err(TrySendError::Closed(_)) => {
                    debug!("subscriber {id} on {topic} is gone, skipping");
                }
            }
        }
        delivered
    }

    /// Closes every subscriber channel of this entity and returns how many
    /// were closed.
    pub(crate) fn close_all(&self) -> usize {
        let mut topics = self.topics.lock().unwrap();
        let mut closed = 0;
        for bucket in topics.values_mut() {
            closed += bucket.len();
            bucket.subscribers.clear();
        }
        closed
    }

    /// Number of live subscribers on `topic`.
    pub(crate) fn subscriber_count(&self, topic: Topic) -> usize {
        let topics = self.topics.lock().unwrap();
        topics.get(&topic).map_or(0, TopicBucket::len)
    }
}
