use std::fmt;

use serde::Serialize;

/// Identifier of one live subscription, unique within a single
/// `(EntityId, Topic)` bucket.
///
/// Generated when the subscription is registered and used only to locate the
/// channel again when the subscription is torn down.
pub type SubscriberId = String;

/// Draws a fresh subscriber id.
pub(crate) fn new_subscriber_id() -> SubscriberId {
    format!("sub-{}", uuid::Uuid::new_v4())
}

/// The aggregate that owns a family of event topics.
///
/// Teams own the shared workspace resources (collections, requests, members,
/// invitations, environments). Users own their shortcodes and their own
/// account stream. The numeric id is stable for the aggregate's lifetime, so
/// it doubles as the key into the hub's entity map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityId {
    Team(u64),
    User(u64),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Team(id) => write!(f, "team:{id}"),
            EntityId::User(id) => write!(f, "user:{id}"),
        }
    }
}

/// The kinds of events an entity can emit.
///
/// The set is closed: every mutation that produces a live notification maps to
/// exactly one of these. The team-scoped topics cover the shared workspace
/// resources; `ShortcodeCreated`, `ShortcodeRevoked` and `UserDeleted` are
/// only ever published on user entities.
///
/// Serializes to the snake_case wire name used in delivered frames, e.g.
/// `"collection_added"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    CollectionAdded,
    CollectionUpdated,
    CollectionRemoved,
    RequestAdded,
    RequestUpdated,
    RequestDeleted,
    MemberAdded,
    MemberUpdated,
    MemberRemoved,
    InvitationAdded,
    InvitationRemoved,
    EnvironmentCreated,
    EnvironmentDeleted,
    ShortcodeCreated,
    ShortcodeRevoked,
    UserDeleted,
}

impl Topic {
    /// Wire name of the topic, matching its serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::CollectionAdded => "collection_added",
            Topic::CollectionUpdated => "collection_updated",
            Topic::CollectionRemoved => "collection_removed",
            Topic::RequestAdded => "request_added",
            Topic::RequestUpdated => "request_updated",
            Topic::RequestDeleted => "request_deleted",
            Topic::MemberAdded => "member_added",
            Topic::MemberUpdated => "member_updated",
            Topic::MemberRemoved => "member_removed",
            Topic::InvitationAdded => "invitation_added",
            Topic::InvitationRemoved => "invitation_removed",
            Topic::EnvironmentCreated => "environment_created",
            Topic::EnvironmentDeleted => "environment_deleted",
            Topic::ShortcodeCreated => "shortcode_created",
            Topic::ShortcodeRevoked => "shortcode_revoked",
            Topic::UserDeleted => "user_deleted",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
