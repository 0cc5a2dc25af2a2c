use crate::error::HuddleError;
use crate::shared::usecase::UseCase;
use huddle_domain::{Template, ID};
use huddle_infra::HuddleContext;

/// Creates a fresh draft copy of a template. The copy reuses the stored
/// audience specification as is: who ends up assigned is decided when the
/// copy itself is published, by resolving that snapshot again at that time.
#[derive(Debug)]
pub struct DuplicateTemplateUseCase {
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
impl UseCase for DuplicateTemplateUseCase {
    type Response = Template;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &HuddleContext) -> Result<Self::Response, Self::Errors> {
        let original = ctx
            .repos
            .templates
            .find(&self.template_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.template_id.clone()))?;

        let copy = Template {
            id: Default::default(),
            name: format!("{} Copy", original.name),
            is_draft: true,
            ..original
        };
        ctx.repos
            .templates
            .insert(&copy)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(copy)
    }
}
