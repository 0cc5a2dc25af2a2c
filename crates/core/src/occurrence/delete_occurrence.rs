use crate::error::HuddleError;
use crate::occurrence::cascade_delete_occurrence;
use crate::shared::usecase::UseCase;
use huddle_domain::{Occurrence, ID};
use huddle_infra::HuddleContext;

/// Deletes one occurrence together with its join records, the user task
/// back-references and any notification deliveries still pending for it.
#[derive(Debug)]
pub struct DeleteOccurrenceUseCase {
    pub occurrence_id: ID,
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
                Self::NotFound(format!("The occurrence with id: {}, was not found.", id))
            }
            UseCaseErrors::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteOccurrenceUseCase {
    type Response = Occurrence;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &HuddleContext) -> Result<Self::Response, Self::Errors> {
        cascade_delete_occurrence(&self.occurrence_id, ctx)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        ctx.repos
            .occurrences
            .delete(&self.occurrence_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.occurrence_id.clone()))
    }
}
