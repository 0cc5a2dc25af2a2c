use crate::notification::AppNotification;
use crate::shared::entity::{Entity, ID};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A member of the team. Owned by the surrounding CRUD layer; the core only
/// reads identity, timezone and role membership, and mutates the
/// `assigned_tasks` back-reference list and the embedded notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: ID,
    pub email: String,
    pub phone: Option<String>,
    pub first_name: String,
    pub last_name: String,
    /// Key used by the clock-in kiosk to look the user up
    pub barcode: Option<String>,
    /// Most recently reported timezone of the user. Reminder send instants
    /// are computed against this, not against the author's timezone.
    pub timezone: Tz,
    pub roles: Vec<ID>,
    /// Ids of this user's `JoinRecord`s. Weak back-references for fast
    /// lookup; the occurrence owns the records. Appended at publish time,
    /// removed only by explicit completion or cascade delete.
    pub assigned_tasks: Vec<ID>,
    pub notifications: Vec<AppNotification>,
}

impl User {
    pub fn new(email: &str) -> Self {
        Self {
            id: Default::default(),
            email: email.to_string(),
            phone: None,
            first_name: String::new(),
            last_name: String::new(),
            barcode: None,
            timezone: chrono_tz::UTC,
            roles: Vec::new(),
            assigned_tasks: Vec::new(),
            notifications: Vec::new(),
        }
    }

    pub fn has_role(&self, role_id: &ID) -> bool {
        self.roles.contains(role_id)
    }

    /// A profile is complete once both name fields are filled in. The
    /// profile-completion task watches this.
    pub fn profile_filled(&self) -> bool {
        !self.first_name.is_empty() && !self.last_name.is_empty()
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: ID,
    pub name: String,
}

impl Role {
    pub fn new(name: &str) -> Self {
        Self {
            id: Default::default(),
            name: name.to_string(),
        }
    }
}

impl Entity for Role {
    fn id(&self) -> &ID {
        &self.id
    }
}
