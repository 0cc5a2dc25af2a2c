use super::ITemplateRepo;
use crate::repos::shared::inmemory_repo::*;
use huddle_domain::{Template, ID};
use std::sync::Mutex;

pub struct InMemoryTemplateRepo {
    templates: Mutex<Vec<Template>>,
}

impl InMemoryTemplateRepo {
    pub fn new() -> Self {
        Self {
            templates: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ITemplateRepo for InMemoryTemplateRepo {
    async fn insert(&self, template: &Template) -> anyhow::Result<()> {
        insert(template, &self.templates);
        Ok(())
    }

    async fn save(&self, template: &Template) -> anyhow::Result<()> {
        save(template, &self.templates);
        Ok(())
    }

    async fn find(&self, template_id: &ID) -> Option<Template> {
        find(template_id, &self.templates)
    }

    async fn delete(&self, template_id: &ID) -> Option<Template> {
        delete(template_id, &self.templates)
    }
}
