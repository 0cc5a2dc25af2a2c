use crate::error::HuddleError;
use crate::shared::usecase::{Subscriber, UseCase};
use huddle_domain::{JoinKind, JoinRecord, OccurrenceKind, ID};
use huddle_infra::HuddleContext;

use super::subscribers::{NotifyWatchersOnSignIn, NotifyWatchersOnSignOut};

/// Sign-ins are accepted from one hour before the occurrence starts until
/// one hour after it ends.
const CLOCK_IN_MARGIN_MILLIS: i64 = 60 * 60 * 1000;

fn within_clock_in_window(now: i64, start_ts: i64, end_ts: i64) -> bool {
    now >= start_ts - CLOCK_IN_MARGIN_MILLIS && now <= end_ts + CLOCK_IN_MARGIN_MILLIS
}

#[derive(Debug)]
pub struct SignInUseCase {
    pub join_record_id: ID,
}

#[derive(Debug)]
pub struct SignOutUseCase {
    pub join_record_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    OccurrenceNotFound(ID),
    AttendanceNotEnabled,
    OutsideWindow,
    AlreadySignedIn,
    NotSignedIn,
    StorageError,
}

impl From<UseCaseErrors> for HuddleError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::NotFound(id) => {
                Self::NotFound(format!("The join record with id: {}, was not found.", id))
            }
            UseCaseErrors::OccurrenceNotFound(id) => {
                Self::NotFound(format!("The occurrence with id: {}, was not found.", id))
            }
            UseCaseErrors::AttendanceNotEnabled => Self::BadClientData(
                "The occurrence does not take attendance.".into(),
            ),
            UseCaseErrors::OutsideWindow => Self::BadClientData(
                "Sign-in is only open from one hour before start until one hour after end."
                    .into(),
            ),
            UseCaseErrors::AlreadySignedIn => {
                Self::Conflict("The user is already signed in to this occurrence.".into())
            }
            UseCaseErrors::NotSignedIn => {
                Self::Conflict("The user has not signed in to this occurrence.".into())
            }
            UseCaseErrors::StorageError => Self::InternalError,
        }
    }
}

/// Shared preamble for sign-in and sign-out: load the record, check the
/// occurrence takes attendance and that the window is open.
async fn attendance_record(
    join_record_id: &ID,
    ctx: &HuddleContext,
) -> Result<JoinRecord, UseCaseErrors> {
    let join_record = ctx
        .repos
        .join_records
        .find(join_record_id)
        .await
        .ok_or_else(|| UseCaseErrors::NotFound(join_record_id.clone()))?;

    let occurrence = ctx
        .repos
        .occurrences
        .find(&join_record.occurrence_id)
        .await
        .ok_or_else(|| UseCaseErrors::OccurrenceNotFound(join_record.occurrence_id.clone()))?;

    match occurrence.kind {
        OccurrenceKind::Event {
            attendance_enabled: true,
            ..
        } => (),
        _ => return Err(UseCaseErrors::AttendanceNotEnabled),
    }

    let now = ctx.sys.get_timestamp_millis();
    if !within_clock_in_window(now, occurrence.start_ts, occurrence.end_ts) {
        return Err(UseCaseErrors::OutsideWindow);
    }

    Ok(join_record)
}

#[async_trait::async_trait(?Send)]
impl UseCase for SignInUseCase {
    type Response = JoinRecord;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &HuddleContext) -> Result<Self::Response, Self::Errors> {
        let mut join_record = attendance_record(&self.join_record_id, ctx).await?;

        match &mut join_record.kind {
            JoinKind::Event { sign_in_at, .. } => {
                if sign_in_at.is_some() {
                    return Err(UseCaseErrors::AlreadySignedIn);
                }
                *sign_in_at = Some(ctx.sys.get_timestamp_millis());
            }
            JoinKind::Assignment => return Err(UseCaseErrors::AttendanceNotEnabled),
        }

        ctx.repos
            .join_records
            .save(&join_record)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(join_record)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(NotifyWatchersOnSignIn)]
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SignOutUseCase {
    type Response = JoinRecord;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &HuddleContext) -> Result<Self::Response, Self::Errors> {
        let mut join_record = attendance_record(&self.join_record_id, ctx).await?;

        match &mut join_record.kind {
            JoinKind::Event {
                sign_in_at,
                sign_out_at,
                ..
            } => {
                if sign_in_at.is_none() {
                    return Err(UseCaseErrors::NotSignedIn);
                }
                // Repeated sign-outs move the timestamp forward
                *sign_out_at = Some(ctx.sys.get_timestamp_millis());
            }
            JoinKind::Assignment => return Err(UseCaseErrors::AttendanceNotEnabled),
        }

        ctx.repos
            .join_records
            .save(&join_record)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(join_record)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(NotifyWatchersOnSignOut)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::usecase::execute;
    use crate::test_helpers::{one_off_event, setup_test_context_at};
    use huddle_domain::{AudienceSpec, RsvpStatus};

    fn event_join_record(user_id: ID, occurrence_id: ID) -> JoinRecord {
        JoinRecord::new(
            user_id,
            occurrence_id,
            JoinKind::Event {
                rsvp: RsvpStatus::Unset,
                sign_in_at: None,
                sign_out_at: None,
            },
        )
    }

    #[tokio::test]
    async fn sign_in_inside_the_window_is_stamped() {
        let mut occurrence = one_off_event(AudienceSpec::default());
        occurrence.is_draft = false;
        occurrence.kind = OccurrenceKind::Event {
            rsvp_enabled: false,
            attendance_enabled: true,
        };
        // 30 min before start
        let ctx = setup_test_context_at(occurrence.start_ts - 30 * 60 * 1000).ctx;
        ctx.repos.occurrences.insert(&occurrence).await.unwrap();
        let join_record = event_join_record(ID::new(), occurrence.id.clone());
        ctx.repos.join_records.insert(&join_record).await.unwrap();

        let signed_in = execute(
            SignInUseCase {
                join_record_id: join_record.id.clone(),
            },
            &ctx,
        )
        .await
        .unwrap();
        match signed_in.kind {
            JoinKind::Event { sign_in_at, .. } => assert!(sign_in_at.is_some()),
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn sign_in_outside_the_window_is_rejected() {
        let mut occurrence = one_off_event(AudienceSpec::default());
        occurrence.is_draft = false;
        occurrence.kind = OccurrenceKind::Event {
            rsvp_enabled: false,
            attendance_enabled: true,
        };
        // 2h before start
        let ctx = setup_test_context_at(occurrence.start_ts - 2 * 60 * 60 * 1000).ctx;
        ctx.repos.occurrences.insert(&occurrence).await.unwrap();
        let join_record = event_join_record(ID::new(), occurrence.id.clone());
        ctx.repos.join_records.insert(&join_record).await.unwrap();

        let res = execute(
            SignInUseCase {
                join_record_id: join_record.id.clone(),
            },
            &ctx,
        )
        .await;
        assert!(matches!(res, Err(UseCaseErrors::OutsideWindow)));
    }

    #[tokio::test]
    async fn sign_out_requires_a_prior_sign_in() {
        let mut occurrence = one_off_event(AudienceSpec::default());
        occurrence.is_draft = false;
        occurrence.kind = OccurrenceKind::Event {
            rsvp_enabled: false,
            attendance_enabled: true,
        };
        let ctx = setup_test_context_at(occurrence.start_ts).ctx;
        ctx.repos.occurrences.insert(&occurrence).await.unwrap();
        let join_record = event_join_record(ID::new(), occurrence.id.clone());
        ctx.repos.join_records.insert(&join_record).await.unwrap();

        let res = execute(
            SignOutUseCase {
                join_record_id: join_record.id.clone(),
            },
            &ctx,
        )
        .await;
        assert!(matches!(res, Err(UseCaseErrors::NotSignedIn)));
    }

    #[tokio::test]
    async fn attendance_must_be_enabled() {
        let occurrence = one_off_event(AudienceSpec::default());
        // one_off_event has rsvp enabled but no attendance
        let ctx = setup_test_context_at(occurrence.start_ts).ctx;
        ctx.repos.occurrences.insert(&occurrence).await.unwrap();
        let join_record = event_join_record(ID::new(), occurrence.id.clone());
        ctx.repos.join_records.insert(&join_record).await.unwrap();

        let res = execute(
            SignInUseCase {
                join_record_id: join_record.id.clone(),
            },
            &ctx,
        )
        .await;
        assert!(matches!(res, Err(UseCaseErrors::AttendanceNotEnabled)));
    }
}
