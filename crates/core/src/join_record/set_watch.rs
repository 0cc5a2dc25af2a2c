use crate::error::HuddleError;
use crate::shared::usecase::UseCase;
use huddle_domain::{JoinRecord, RecordRef, Watch, WatchPredicate, ID};
use huddle_infra::HuddleContext;

/// Attaches (or replaces) the completion watch on a join record, after
/// checking that the watched target exists and that the predicate makes
/// sense for the target kind.
#[derive(Debug)]
pub struct SetWatchUseCase {
    pub join_record_id: ID,
    pub watch: Watch,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    TargetNotFound(ID),
    PredicateMismatch,
    StorageError,
}

impl From<UseCaseErrors> for HuddleError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::NotFound(id) => {
                Self::NotFound(format!("The join record with id: {}, was not found.", id))
            }
            UseCaseErrors::TargetNotFound(id) => Self::NotFound(format!(
                "The watch target with id: {}, was not found.",
                id
            )),
            UseCaseErrors::PredicateMismatch => Self::BadClientData(
                "The watch predicate does not apply to the given target kind.".into(),
            ),
            UseCaseErrors::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetWatchUseCase {
    type Response = JoinRecord;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &HuddleContext) -> Result<Self::Response, Self::Errors> {
        let mut join_record = ctx
            .repos
            .join_records
            .find(&self.join_record_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.join_record_id.clone()))?;

        match (&self.watch.target, self.watch.predicate) {
            (RecordRef::JoinRecord(id), WatchPredicate::RsvpSet)
            | (RecordRef::JoinRecord(id), WatchPredicate::Completed) => {
                if ctx.repos.join_records.find(id).await.is_none() {
                    return Err(UseCaseErrors::TargetNotFound(id.clone()));
                }
            }
            (RecordRef::User(id), WatchPredicate::ProfileFilled) => {
                if ctx.repos.users.find(id).await.is_none() {
                    return Err(UseCaseErrors::TargetNotFound(id.clone()));
                }
            }
            _ => return Err(UseCaseErrors::PredicateMismatch),
        }

        join_record.watch = Some(self.watch.clone());
        ctx.repos
            .join_records
            .save(&join_record)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(join_record)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::usecase::execute;
    use crate::test_helpers::setup_test_context;
    use huddle_domain::{JoinKind, User};

    #[tokio::test]
    async fn attaches_a_profile_watch_on_an_existing_user() {
        let ctx = setup_test_context().ctx;
        let user = User::new("member@team.test");
        ctx.repos.users.insert(&user).await.unwrap();
        let join_record = JoinRecord::new(user.id.clone(), ID::new(), JoinKind::Assignment);
        ctx.repos.join_records.insert(&join_record).await.unwrap();

        let watch = Watch {
            target: RecordRef::User(user.id.clone()),
            predicate: WatchPredicate::ProfileFilled,
        };
        let updated = execute(
            SetWatchUseCase {
                join_record_id: join_record.id.clone(),
                watch: watch.clone(),
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(updated.watch, Some(watch));
    }

    #[tokio::test]
    async fn rejects_a_profile_predicate_on_a_join_record_target() {
        let ctx = setup_test_context().ctx;
        let join_record = JoinRecord::new(ID::new(), ID::new(), JoinKind::Assignment);
        ctx.repos.join_records.insert(&join_record).await.unwrap();

        let res = execute(
            SetWatchUseCase {
                join_record_id: join_record.id.clone(),
                watch: Watch {
                    target: RecordRef::JoinRecord(join_record.id.clone()),
                    predicate: WatchPredicate::ProfileFilled,
                },
            },
            &ctx,
        )
        .await;
        assert!(matches!(res, Err(UseCaseErrors::PredicateMismatch)));
    }

    #[tokio::test]
    async fn rejects_a_missing_target() {
        let ctx = setup_test_context().ctx;
        let join_record = JoinRecord::new(ID::new(), ID::new(), JoinKind::Assignment);
        ctx.repos.join_records.insert(&join_record).await.unwrap();

        let res = execute(
            SetWatchUseCase {
                join_record_id: join_record.id.clone(),
                watch: Watch {
                    target: RecordRef::JoinRecord(ID::new()),
                    predicate: WatchPredicate::Completed,
                },
            },
            &ctx,
        )
        .await;
        assert!(matches!(res, Err(UseCaseErrors::TargetNotFound(_))));
    }
}
