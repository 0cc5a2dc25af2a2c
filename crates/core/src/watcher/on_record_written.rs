use crate::error::HuddleError;
use crate::shared::usecase::UseCase;
use huddle_domain::{RecordRef, WatchPredicate};
use huddle_infra::HuddleContext;
use tracing::info;

/// Reacts to a write on a watchable record: every open join record watching
/// it has its predicate re-evaluated against the record's current state,
/// and is promoted to completed when the predicate holds.
///
/// This is fed by the mutation paths known to affect completion (RSVP,
/// explicit completion, user profile edits in the CRUD layer), not by a
/// blanket post-save hook on every write in the system. Records that are
/// gone by the time the event is handled are skipped silently.
#[derive(Debug)]
pub struct OnRecordWrittenUseCase {
    pub record: RecordRef,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

impl From<UseCaseErrors> for HuddleError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::StorageError => Self::InternalError,
        }
    }
}

async fn predicate_holds(
    target: &RecordRef,
    predicate: WatchPredicate,
    ctx: &HuddleContext,
) -> bool {
    match target {
        RecordRef::JoinRecord(id) => match ctx.repos.join_records.find(id).await {
            Some(join_record) => join_record.satisfies(predicate),
            None => false,
        },
        RecordRef::User(id) => match (predicate, ctx.repos.users.find(id).await) {
            (WatchPredicate::ProfileFilled, Some(user)) => user.profile_filled(),
            _ => false,
        },
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for OnRecordWrittenUseCase {
    type Response = usize;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &HuddleContext) -> Result<Self::Response, Self::Errors> {
        let watchers = ctx.repos.join_records.find_open_watchers(&self.record).await;
        let mut completed = 0;
        for mut watcher in watchers {
            let watch = match &watcher.watch {
                Some(watch) => watch.clone(),
                None => continue,
            };
            if !predicate_holds(&watch.target, watch.predicate, ctx).await {
                continue;
            }
            // The watcher only flips the completion timestamp; the task
            // back-reference on the user is removed by the explicit user
            // paths, never from here
            watcher.completed_at = Some(ctx.sys.get_timestamp_millis());
            ctx.repos
                .join_records
                .save(&watcher)
                .await
                .map_err(|_| UseCaseErrors::StorageError)?;
            info!(
                "Join record {} auto-completed by a write to its watch target.",
                watcher.id
            );
            completed += 1;
        }
        Ok(completed)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::usecase::execute;
    use crate::test_helpers::setup_test_context;
    use huddle_domain::{JoinKind, JoinRecord, RsvpStatus, User, Watch, ID};

    #[tokio::test]
    async fn completes_a_profile_task_once_the_names_are_filled() {
        let ctx = setup_test_context().ctx;
        let mut user = User::new("member@team.test");
        ctx.repos.users.insert(&user).await.unwrap();

        // A profile-completion task watching the user record itself
        let mut task = JoinRecord::new(user.id.clone(), ID::new(), JoinKind::Assignment);
        task.watch = Some(Watch {
            target: RecordRef::User(user.id.clone()),
            predicate: WatchPredicate::ProfileFilled,
        });
        ctx.repos.join_records.insert(&task).await.unwrap();

        // An empty profile does not complete anything
        let completed = execute(
            OnRecordWrittenUseCase {
                record: RecordRef::User(user.id.clone()),
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(completed, 0);

        user.first_name = "Alex".into();
        user.last_name = "Doe".into();
        ctx.repos.users.save(&user).await.unwrap();
        let completed = execute(
            OnRecordWrittenUseCase {
                record: RecordRef::User(user.id.clone()),
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(completed, 1);
        let task = ctx.repos.join_records.find(&task.id).await.unwrap();
        assert!(task.is_completed());
    }

    #[tokio::test]
    async fn auto_completion_leaves_the_users_task_list_alone() {
        let ctx = setup_test_context().ctx;
        let mut user = User::new("member@team.test");
        // An answered RSVP task whose completion the watcher has not yet
        // picked up
        let mut task = JoinRecord::new(
            user.id.clone(),
            ID::new(),
            JoinKind::Event {
                rsvp: RsvpStatus::Yes,
                sign_in_at: None,
                sign_out_at: None,
            },
        );
        task.watch = Some(Watch {
            target: RecordRef::JoinRecord(task.id.clone()),
            predicate: WatchPredicate::RsvpSet,
        });
        user.assigned_tasks.push(task.id.clone());
        ctx.repos.users.insert(&user).await.unwrap();
        ctx.repos.join_records.insert(&task).await.unwrap();

        let completed = execute(
            OnRecordWrittenUseCase {
                record: RecordRef::JoinRecord(task.id.clone()),
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(completed, 1);

        // The record is completed but its back-reference stays until the
        // user or a cascade removes it
        let task = ctx.repos.join_records.find(&task.id).await.unwrap();
        assert!(task.is_completed());
        let user = ctx.repos.users.find(&user.id).await.unwrap();
        assert_eq!(user.assigned_tasks, vec![task.id.clone()]);
    }

    #[tokio::test]
    async fn an_already_completed_watcher_is_not_touched_again() {
        let ctx = setup_test_context().ctx;
        let user = User::new("member@team.test");
        ctx.repos.users.insert(&user).await.unwrap();

        let mut task = JoinRecord::new(user.id.clone(), ID::new(), JoinKind::Assignment);
        task.watch = Some(Watch {
            target: RecordRef::JoinRecord(task.id.clone()),
            predicate: WatchPredicate::Completed,
        });
        task.completed_at = Some(42);
        ctx.repos.join_records.insert(&task).await.unwrap();

        let completed = execute(
            OnRecordWrittenUseCase {
                record: RecordRef::JoinRecord(task.id.clone()),
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(completed, 0);
        let task = ctx.repos.join_records.find(&task.id).await.unwrap();
        assert_eq!(task.completed_at, Some(42));
    }
}
