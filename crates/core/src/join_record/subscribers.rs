use super::clock_in::{SignInUseCase, SignOutUseCase};
use super::record_completion::RecordCompletionUseCase;
use super::rsvp::RsvpUseCase;
use crate::shared::usecase::{execute, Subscriber};
use crate::watcher::on_record_written::OnRecordWrittenUseCase;
use huddle_domain::{JoinRecord, RecordRef};
use huddle_infra::HuddleContext;

pub struct NotifyWatchersOnRsvp;

#[async_trait::async_trait(?Send)]
impl Subscriber<RsvpUseCase> for NotifyWatchersOnRsvp {
    async fn notify(&self, e: &JoinRecord, ctx: &HuddleContext) {
        let usecase = OnRecordWrittenUseCase {
            record: RecordRef::JoinRecord(e.id.clone()),
        };
        // Sideeffect, ignore result
        let _ = execute(usecase, ctx).await;
    }
}

pub struct NotifyWatchersOnCompletion;

#[async_trait::async_trait(?Send)]
impl Subscriber<RecordCompletionUseCase> for NotifyWatchersOnCompletion {
    async fn notify(&self, e: &JoinRecord, ctx: &HuddleContext) {
        let usecase = OnRecordWrittenUseCase {
            record: RecordRef::JoinRecord(e.id.clone()),
        };
        // Sideeffect, ignore result
        let _ = execute(usecase, ctx).await;
    }
}

pub struct NotifyWatchersOnSignIn;

#[async_trait::async_trait(?Send)]
impl Subscriber<SignInUseCase> for NotifyWatchersOnSignIn {
    async fn notify(&self, e: &JoinRecord, ctx: &HuddleContext) {
        let usecase = OnRecordWrittenUseCase {
            record: RecordRef::JoinRecord(e.id.clone()),
        };
        // Sideeffect, ignore result
        let _ = execute(usecase, ctx).await;
    }
}

pub struct NotifyWatchersOnSignOut;

#[async_trait::async_trait(?Send)]
impl Subscriber<SignOutUseCase> for NotifyWatchersOnSignOut {
    async fn notify(&self, e: &JoinRecord, ctx: &HuddleContext) {
        let usecase = OnRecordWrittenUseCase {
            record: RecordRef::JoinRecord(e.id.clone()),
        };
        // Sideeffect, ignore result
        let _ = execute(usecase, ctx).await;
    }
}
