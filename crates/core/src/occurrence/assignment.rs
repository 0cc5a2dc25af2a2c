use crate::notification::schedule::{schedule_notifications, LinkBuilder};
use huddle_domain::{
    JoinKind, JoinRecord, Occurrence, OccurrenceKind, RecordRef, RsvpStatus, User, Watch,
    WatchPredicate,
};
use huddle_infra::HuddleContext;
use tracing::warn;

/// Creates the per-user join records for one published occurrence and wires
/// each into the user's task list and notification schedule. Must be called
/// at most once per occurrence; the publish flow's draft guard is what
/// protects against duplicate (user, occurrence) pairs.
pub async fn create_join_records(
    occurrence: &Occurrence,
    audience: &[User],
    link_builder: LinkBuilder,
    ctx: &HuddleContext,
) -> anyhow::Result<Vec<JoinRecord>> {
    let mut join_records = Vec::with_capacity(audience.len());
    for user in audience {
        // Only the watch depends on the occurrence kind: an attendance-only
        // event completes through the clock-in flow, not a predicate
        let (kind, predicate) = match occurrence.kind {
            OccurrenceKind::Event { rsvp_enabled, .. } => (
                JoinKind::Event {
                    rsvp: RsvpStatus::Unset,
                    sign_in_at: None,
                    sign_out_at: None,
                },
                if rsvp_enabled {
                    Some(WatchPredicate::RsvpSet)
                } else {
                    None
                },
            ),
            OccurrenceKind::Assignment => (JoinKind::Assignment, Some(WatchPredicate::Completed)),
        };

        let mut join_record = JoinRecord::new(user.id.clone(), occurrence.id.clone(), kind);
        if let Some(predicate) = predicate {
            join_record.watch = Some(Watch {
                target: RecordRef::JoinRecord(join_record.id.clone()),
                predicate,
            });
        }

        // The join record must exist before the user back-reference is
        // written: a crash in between leaves a collectable orphan record,
        // never a dangling reference.
        ctx.repos.join_records.insert(&join_record).await?;

        // The resolved audience is a snapshot taken once per publish; the
        // user document must be re-read here so appends from earlier
        // occurrences (and inline in-app deliveries) are not overwritten.
        match ctx.repos.users.find(&user.id).await {
            Some(mut user) => {
                user.assigned_tasks.push(join_record.id.clone());
                ctx.repos.users.save(&user).await?;
                schedule_notifications(
                    &occurrence.policy,
                    &occurrence.id,
                    &user,
                    link_builder(&join_record),
                    ctx,
                )
                .await?;
            }
            None => warn!(
                "User {} disappeared during publish, join record {} left without a back-reference.",
                user.id, join_record.id
            ),
        }
        join_records.push(join_record);
    }
    Ok(join_records)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_helpers::{noop_link, one_off_event, setup_test_context};
    use chrono::NaiveDate;
    use huddle_domain::{AudienceSpec, NotificationPolicy};

    #[tokio::test]
    async fn later_occurrences_see_the_appends_of_earlier_ones() {
        let test = setup_test_context();
        let ctx = test.ctx.clone();
        let user = User::new("member@team.test");
        ctx.repos.users.insert(&user).await.unwrap();
        let audience = vec![user.clone()];

        // Same audience snapshot reused across occurrences, as in the
        // template publish pipeline
        for _ in 0..3 {
            let occurrence = one_off_event(AudienceSpec {
                users: vec![user.id.clone()],
                roles: Vec::new(),
            });
            ctx.repos.occurrences.insert(&occurrence).await.unwrap();
            create_join_records(&occurrence, &audience, noop_link, &ctx)
                .await
                .unwrap();
        }

        let user = ctx.repos.users.find(&user.id).await.unwrap();
        assert_eq!(user.assigned_tasks.len(), 3);
    }

    #[tokio::test]
    async fn attendance_only_events_still_track_tasks_and_reminders() {
        let test = setup_test_context();
        let ctx = test.ctx.clone();
        let user = User::new("member@team.test");
        ctx.repos.users.insert(&user).await.unwrap();

        let mut occurrence = one_off_event(AudienceSpec {
            users: vec![user.id.clone()],
            roles: Vec::new(),
        });
        occurrence.kind = OccurrenceKind::Event {
            rsvp_enabled: false,
            attendance_enabled: true,
        };
        occurrence.policy = NotificationPolicy {
            send_dates: vec![NaiveDate::from_ymd(2100, 1, 1)],
            channels: Default::default(),
            text: "Shift coming up".into(),
        };
        ctx.repos.occurrences.insert(&occurrence).await.unwrap();

        let records = create_join_records(&occurrence, &[user.clone()], noop_link, &ctx)
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        // No predicate can complete an attendance-only record
        assert!(records[0].watch.is_none());

        let user = ctx.repos.users.find(&user.id).await.unwrap();
        assert_eq!(user.assigned_tasks, vec![records[0].id.clone()]);
        // The configured date plus the implicit immediate one
        let notifications = ctx.repos.push_notifications.find_by_user(&user.id).await;
        assert_eq!(notifications.len(), 2);
        assert_eq!(test.job_queue.pending_count(), 1);
    }
}
