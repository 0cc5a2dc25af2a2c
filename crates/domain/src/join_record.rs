use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum RsvpStatus {
    Yes,
    No,
    Maybe,
    Unset,
}

impl Default for RsvpStatus {
    fn default() -> Self {
        Self::Unset
    }
}

/// A reference to a record another record can watch. The original design
/// allowed a join record to point at any document in the store; here the
/// watchable kinds are closed over a sum type so the watcher can dispatch
/// on the tag instead of looking a field up by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum RecordRef {
    JoinRecord(ID),
    User(ID),
}

impl RecordRef {
    pub fn id(&self) -> &ID {
        match self {
            RecordRef::JoinRecord(id) => id,
            RecordRef::User(id) => id,
        }
    }
}

/// The condition on the watched record that counts as "done".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum WatchPredicate {
    /// The watched `JoinRecord` has an RSVP answer, any answer
    RsvpSet,
    /// The watched `JoinRecord` has been explicitly completed
    Completed,
    /// The watched `User` has filled in both name fields
    ProfileFilled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Watch {
    pub target: RecordRef,
    pub predicate: WatchPredicate,
}

/// Per-occurrence-kind state carried by a `JoinRecord`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum JoinKind {
    Event {
        rsvp: RsvpStatus,
        /// UTC millis, set by the clock-in flow
        sign_in_at: Option<i64>,
        sign_out_at: Option<i64>,
    },
    Assignment,
}

/// One user's relationship to one `Occurrence`: RSVP, attendance and
/// completion state. Exactly one exists per (user, occurrence) pair. The
/// occurrence owns its join records; the user's `assigned_tasks` list holds
/// a back-reference that must be removed together with the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRecord {
    pub id: ID,
    pub user_id: ID,
    pub occurrence_id: ID,
    pub kind: JoinKind,
    /// When set, the completion watcher auto-completes this record as soon
    /// as the watched predicate holds on the target record.
    pub watch: Option<Watch>,
    /// UTC millis at which the user first opened the item
    pub seen_at: Option<i64>,
    /// UTC millis at which the obligation was satisfied
    pub completed_at: Option<i64>,
}

impl JoinRecord {
    pub fn new(user_id: ID, occurrence_id: ID, kind: JoinKind) -> Self {
        Self {
            id: Default::default(),
            user_id,
            occurrence_id,
            kind,
            watch: None,
            seen_at: None,
            completed_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Whether this record itself satisfies the given predicate. Evaluated
    /// by the watcher against the current stored state of the record.
    pub fn satisfies(&self, predicate: WatchPredicate) -> bool {
        match predicate {
            WatchPredicate::RsvpSet => match self.kind {
                JoinKind::Event { rsvp, .. } => rsvp != RsvpStatus::Unset,
                JoinKind::Assignment => false,
            },
            WatchPredicate::Completed => self.completed_at.is_some(),
            WatchPredicate::ProfileFilled => false,
        }
    }
}

impl Entity for JoinRecord {
    fn id(&self) -> &ID {
        &self.id
    }
}
