use super::IJoinRecordRepo;
use crate::repos::shared::inmemory_repo::*;
use huddle_domain::{JoinRecord, RecordRef, ID};
use std::sync::Mutex;

pub struct InMemoryJoinRecordRepo {
    join_records: Mutex<Vec<JoinRecord>>,
}

impl InMemoryJoinRecordRepo {
    pub fn new() -> Self {
        Self {
            join_records: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IJoinRecordRepo for InMemoryJoinRecordRepo {
    async fn insert(&self, join_record: &JoinRecord) -> anyhow::Result<()> {
        insert(join_record, &self.join_records);
        Ok(())
    }

    async fn save(&self, join_record: &JoinRecord) -> anyhow::Result<()> {
        save(join_record, &self.join_records);
        Ok(())
    }

    async fn find(&self, join_record_id: &ID) -> Option<JoinRecord> {
        find(join_record_id, &self.join_records)
    }

    async fn find_by_occurrence(&self, occurrence_id: &ID) -> Vec<JoinRecord> {
        find_by(&self.join_records, |jr| &jr.occurrence_id == occurrence_id)
    }

    async fn find_open_watchers(&self, target: &RecordRef) -> Vec<JoinRecord> {
        find_by(&self.join_records, |jr| {
            !jr.is_completed() && jr.watch.as_ref().map(|w| &w.target) == Some(target)
        })
    }

    async fn delete(&self, join_record_id: &ID) -> Option<JoinRecord> {
        delete(join_record_id, &self.join_records)
    }

    async fn delete_by_occurrence(&self, occurrence_id: &ID) -> Vec<JoinRecord> {
        find_and_delete_by(&self.join_records, |jr| {
            &jr.occurrence_id == occurrence_id
        })
    }
}
