use super::IOccurrenceRepo;
use crate::repos::shared::inmemory_repo::*;
use huddle_domain::{Occurrence, ID};
use std::sync::Mutex;

pub struct InMemoryOccurrenceRepo {
    occurrences: Mutex<Vec<Occurrence>>,
}

impl InMemoryOccurrenceRepo {
    pub fn new() -> Self {
        Self {
            occurrences: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IOccurrenceRepo for InMemoryOccurrenceRepo {
    async fn insert(&self, occurrence: &Occurrence) -> anyhow::Result<()> {
        insert(occurrence, &self.occurrences);
        Ok(())
    }

    async fn save(&self, occurrence: &Occurrence) -> anyhow::Result<()> {
        save(occurrence, &self.occurrences);
        Ok(())
    }

    async fn find(&self, occurrence_id: &ID) -> Option<Occurrence> {
        find(occurrence_id, &self.occurrences)
    }

    async fn find_by_template(&self, template_id: &ID) -> Vec<Occurrence> {
        find_by(&self.occurrences, |o| {
            o.template_id.as_ref() == Some(template_id)
        })
    }

    async fn delete(&self, occurrence_id: &ID) -> Option<Occurrence> {
        delete(occurrence_id, &self.occurrences)
    }
}
