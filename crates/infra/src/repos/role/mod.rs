mod inmemory;

pub use inmemory::InMemoryRoleRepo;

use huddle_domain::{Role, ID};

#[async_trait::async_trait]
pub trait IRoleRepo: Send + Sync {
    async fn insert(&self, role: &Role) -> anyhow::Result<()>;
    async fn find(&self, role_id: &ID) -> Option<Role>;
    async fn delete(&self, role_id: &ID) -> Option<Role>;
}
