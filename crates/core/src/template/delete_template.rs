use crate::error::HuddleError;
use crate::occurrence::cascade_delete_occurrence;
use crate::shared::usecase::UseCase;
use huddle_domain::{Entity, Template, ID};
use huddle_infra::HuddleContext;

/// Deletes a template and cascades through everything it generated: every
/// occurrence, their join records, the user task back-references and any
/// pending notification jobs.
#[derive(Debug)]
pub struct DeleteTemplateUseCase {
    pub template_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseErrors> for HuddleError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::NotFound(id) => {
                Self::NotFound(format!("The template with id: {}, was not found.", id))
            }
            UseCaseErrors::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteTemplateUseCase {
    type Response = Template;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &HuddleContext) -> Result<Self::Response, Self::Errors> {
        let template = ctx
            .repos
            .templates
            .find(&self.template_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.template_id.clone()))?;

        for occurrence in ctx.repos.occurrences.find_by_template(&template.id).await {
            cascade_delete_occurrence(occurrence.id(), ctx)
                .await
                .map_err(|_| UseCaseErrors::StorageError)?;
            ctx.repos.occurrences.delete(occurrence.id()).await;
        }

        ctx.repos
            .templates
            .delete(&template.id)
            .await
            .ok_or(UseCaseErrors::StorageError)
    }
}
