use crate::error::HuddleError;
use crate::notification::schedule::LinkBuilder;
use crate::occurrence::assignment::create_join_records;
use crate::shared::audience::resolve_audience;
use crate::shared::usecase::UseCase;
use huddle_domain::{Occurrence, ID};
use huddle_infra::HuddleContext;

/// Publishes a one-off (non-recurring) occurrence: resolves its audience,
/// creates the join records and reminder schedule, and flips the draft
/// flag. The recurring path goes through `PublishTemplateUseCase` instead.
#[derive(Debug)]
pub struct PublishOccurrenceUseCase {
    pub occurrence_id: ID,
    pub link_builder: LinkBuilder,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    AlreadyPublished(ID),
    InvalidTimespan,
    StorageError,
}

impl From<UseCaseErrors> for HuddleError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::NotFound(id) => {
                Self::NotFound(format!("The occurrence with id: {}, was not found.", id))
            }
            UseCaseErrors::AlreadyPublished(id) => Self::Conflict(format!(
                "The occurrence with id: {}, is already published.",
                id
            )),
            UseCaseErrors::InvalidTimespan => {
                Self::BadClientData("Start of the occurrence must be before its end".into())
            }
            UseCaseErrors::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for PublishOccurrenceUseCase {
    type Response = Occurrence;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &HuddleContext) -> Result<Self::Response, Self::Errors> {
        let mut occurrence = ctx
            .repos
            .occurrences
            .find(&self.occurrence_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.occurrence_id.clone()))?;
        if !occurrence.is_draft {
            return Err(UseCaseErrors::AlreadyPublished(occurrence.id));
        }
        if occurrence.start_ts >= occurrence.end_ts {
            return Err(UseCaseErrors::InvalidTimespan);
        }

        let audience = resolve_audience(&occurrence.audience, ctx).await;
        occurrence.is_draft = false;
        create_join_records(&occurrence, &audience, self.link_builder, ctx)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        ctx.repos
            .occurrences
            .save(&occurrence)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(occurrence)
    }
}
