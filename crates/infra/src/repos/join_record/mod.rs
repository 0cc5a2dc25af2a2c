mod inmemory;

pub use inmemory::InMemoryJoinRecordRepo;

use huddle_domain::{JoinRecord, RecordRef, ID};

#[async_trait::async_trait]
pub trait IJoinRecordRepo: Send + Sync {
    async fn insert(&self, join_record: &JoinRecord) -> anyhow::Result<()>;
    async fn save(&self, join_record: &JoinRecord) -> anyhow::Result<()>;
    async fn find(&self, join_record_id: &ID) -> Option<JoinRecord>;
    async fn find_by_occurrence(&self, occurrence_id: &ID) -> Vec<JoinRecord>;
    /// Join records that watch the given record and are not yet completed.
    /// A real store should serve this from an index on the watch target id
    /// rather than a collection scan.
    async fn find_open_watchers(&self, target: &RecordRef) -> Vec<JoinRecord>;
    async fn delete(&self, join_record_id: &ID) -> Option<JoinRecord>;
    async fn delete_by_occurrence(&self, occurrence_id: &ID) -> Vec<JoinRecord>;
}
