use super::subscribers::NotifyWatchersOnRsvp;
use crate::error::HuddleError;
use crate::shared::usecase::{Subscriber, UseCase};
use huddle_domain::{JoinKind, JoinRecord, RsvpStatus, ID};
use huddle_infra::HuddleContext;

/// Records the user's RSVP answer on an event join record. The completion
/// watcher picks the write up afterwards and closes the open RSVP task.
#[derive(Debug)]
pub struct RsvpUseCase {
    pub join_record_id: ID,
    pub status: RsvpStatus,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    NotAnEvent(ID),
    StorageError,
}

impl From<UseCaseErrors> for HuddleError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::NotFound(id) => {
                Self::NotFound(format!("The join record with id: {}, was not found.", id))
            }
            UseCaseErrors::NotAnEvent(id) => Self::BadClientData(format!(
                "The join record with id: {}, does not belong to an event and cannot be RSVPed.",
                id
            )),
            UseCaseErrors::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RsvpUseCase {
    type Response = JoinRecord;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &HuddleContext) -> Result<Self::Response, Self::Errors> {
        let mut join_record = ctx
            .repos
            .join_records
            .find(&self.join_record_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.join_record_id.clone()))?;

        match &mut join_record.kind {
            JoinKind::Event { rsvp, .. } => *rsvp = self.status,
            JoinKind::Assignment => {
                return Err(UseCaseErrors::NotAnEvent(self.join_record_id.clone()))
            }
        }

        ctx.repos
            .join_records
            .save(&join_record)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(join_record)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(NotifyWatchersOnRsvp)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::usecase::execute;
    use crate::test_helpers::{noop_link, one_off_event, setup_test_context};
    use crate::occurrence::publish_occurrence::PublishOccurrenceUseCase;
    use huddle_domain::{AudienceSpec, User};

    #[tokio::test]
    async fn an_rsvp_answer_auto_completes_the_open_task() {
        let ctx = setup_test_context().ctx;
        let user = User::new("member@team.test");
        ctx.repos.users.insert(&user).await.unwrap();

        let occurrence = one_off_event(AudienceSpec {
            users: vec![user.id.clone()],
            roles: Vec::new(),
        });
        ctx.repos.occurrences.insert(&occurrence).await.unwrap();
        execute(
            PublishOccurrenceUseCase {
                occurrence_id: occurrence.id.clone(),
                link_builder: noop_link,
            },
            &ctx,
        )
        .await
        .unwrap();

        let join_record = ctx
            .repos
            .join_records
            .find_by_occurrence(&occurrence.id)
            .await
            .remove(0);
        assert!(!join_record.is_completed());

        execute(
            RsvpUseCase {
                join_record_id: join_record.id.clone(),
                status: RsvpStatus::No,
            },
            &ctx,
        )
        .await
        .unwrap();

        // Any answer counts, including "no"
        let join_record = ctx.repos.join_records.find(&join_record.id).await.unwrap();
        assert!(join_record.is_completed());
    }

    #[tokio::test]
    async fn an_assignment_join_record_cannot_be_rsvped() {
        let ctx = setup_test_context().ctx;
        let join_record = huddle_domain::JoinRecord::new(
            ID::new(),
            ID::new(),
            huddle_domain::JoinKind::Assignment,
        );
        ctx.repos.join_records.insert(&join_record).await.unwrap();

        let res = execute(
            RsvpUseCase {
                join_record_id: join_record.id.clone(),
                status: RsvpStatus::Yes,
            },
            &ctx,
        )
        .await;
        assert!(matches!(res, Err(UseCaseErrors::NotAnEvent(_))));
    }
}
