mod inmemory;

pub use inmemory::InMemoryUserRepo;

use huddle_domain::{User, ID};

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn save(&self, user: &User) -> anyhow::Result<()>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    async fn find_many(&self, user_ids: &[ID]) -> Vec<User>;
    /// All users holding the given role. Queried at publish time to resolve
    /// an audience specification into a user snapshot.
    async fn find_by_role(&self, role_id: &ID) -> Vec<User>;
    async fn delete(&self, user_id: &ID) -> Option<User>;
}
