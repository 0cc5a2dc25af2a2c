use crate::shared::entity::ID;
use serde::{Deserialize, Serialize};

/// Who a `Template` or `Occurrence` targets: an explicit list of users
/// unioned with all members of the listed roles. Resolution happens at
/// publish time and the result is a snapshot; role membership changes after
/// publish do not affect already published items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceSpec {
    pub users: Vec<ID>,
    pub roles: Vec<ID>,
}

impl AudienceSpec {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.roles.is_empty()
    }
}
