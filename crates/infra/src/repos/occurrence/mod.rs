mod inmemory;

pub use inmemory::InMemoryOccurrenceRepo;

use huddle_domain::{Occurrence, ID};

#[async_trait::async_trait]
pub trait IOccurrenceRepo: Send + Sync {
    async fn insert(&self, occurrence: &Occurrence) -> anyhow::Result<()>;
    async fn save(&self, occurrence: &Occurrence) -> anyhow::Result<()>;
    async fn find(&self, occurrence_id: &ID) -> Option<Occurrence>;
    async fn find_by_template(&self, template_id: &ID) -> Vec<Occurrence>;
    async fn delete(&self, occurrence_id: &ID) -> Option<Occurrence>;
}
