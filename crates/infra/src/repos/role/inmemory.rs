use super::IRoleRepo;
use crate::repos::shared::inmemory_repo::*;
use huddle_domain::{Role, ID};
use std::sync::Mutex;

pub struct InMemoryRoleRepo {
    roles: Mutex<Vec<Role>>,
}

impl InMemoryRoleRepo {
    pub fn new() -> Self {
        Self {
            roles: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IRoleRepo for InMemoryRoleRepo {
    async fn insert(&self, role: &Role) -> anyhow::Result<()> {
        insert(role, &self.roles);
        Ok(())
    }

    async fn find(&self, role_id: &ID) -> Option<Role> {
        find(role_id, &self.roles)
    }

    async fn delete(&self, role_id: &ID) -> Option<Role> {
        delete(role_id, &self.roles)
    }
}
