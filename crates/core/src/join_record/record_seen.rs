use crate::error::HuddleError;
use crate::shared::usecase::UseCase;
use huddle_domain::{JoinRecord, ID};
use huddle_infra::HuddleContext;

/// Stamps the first time a user opens an item. Later calls keep the
/// original timestamp.
#[derive(Debug)]
pub struct RecordSeenUseCase {
    pub join_record_id: ID,
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
                Self::NotFound(format!("The join record with id: {}, was not found.", id))
            }
            UseCaseErrors::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RecordSeenUseCase {
    type Response = JoinRecord;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &HuddleContext) -> Result<Self::Response, Self::Errors> {
        let mut join_record = ctx
            .repos
            .join_records
            .find(&self.join_record_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.join_record_id.clone()))?;

        if join_record.seen_at.is_none() {
            join_record.seen_at = Some(ctx.sys.get_timestamp_millis());
            ctx.repos
                .join_records
                .save(&join_record)
                .await
                .map_err(|_| UseCaseErrors::StorageError)?;
        }

        Ok(join_record)
    }
}
