mod inmemory;

pub use inmemory::InMemoryTemplateRepo;

use huddle_domain::{Template, ID};

#[async_trait::async_trait]
pub trait ITemplateRepo: Send + Sync {
    async fn insert(&self, template: &Template) -> anyhow::Result<()>;
    async fn save(&self, template: &Template) -> anyhow::Result<()>;
    async fn find(&self, template_id: &ID) -> Option<Template>;
    async fn delete(&self, template_id: &ID) -> Option<Template>;
}
