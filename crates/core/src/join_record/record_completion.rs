use super::subscribers::NotifyWatchersOnCompletion;
use crate::error::HuddleError;
use crate::shared::usecase::{Subscriber, UseCase};
use huddle_domain::{JoinRecord, ID};
use huddle_infra::HuddleContext;

/// Explicit user-initiated "mark done". Sets the completion timestamp
/// directly without going through the watcher, and clears the task from
/// the user's list. Completing an already completed record is a no-op.
#[derive(Debug)]
pub struct RecordCompletionUseCase {
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
impl UseCase for RecordCompletionUseCase {
    type Response = JoinRecord;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &HuddleContext) -> Result<Self::Response, Self::Errors> {
        let mut join_record = ctx
            .repos
            .join_records
            .find(&self.join_record_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.join_record_id.clone()))?;

        if join_record.completed_at.is_none() {
            join_record.completed_at = Some(ctx.sys.get_timestamp_millis());
            ctx.repos
                .join_records
                .save(&join_record)
                .await
                .map_err(|_| UseCaseErrors::StorageError)?;
        }

        if let Some(mut user) = ctx.repos.users.find(&join_record.user_id).await {
            if user.assigned_tasks.contains(&join_record.id) {
                user.assigned_tasks.retain(|task| task != &join_record.id);
                ctx.repos
                    .users
                    .save(&user)
                    .await
                    .map_err(|_| UseCaseErrors::StorageError)?;
            }
        }

        Ok(join_record)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(NotifyWatchersOnCompletion)]
    }
}
