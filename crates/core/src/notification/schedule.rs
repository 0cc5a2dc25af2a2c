use crate::notification::deliver_notification::DeliverNotificationUseCase;
use crate::shared::usecase::execute;
use huddle_domain::{to_absolute, JoinRecord, NotificationPolicy, PushNotification, User, ID};
use huddle_infra::HuddleContext;
use tracing::warn;

/// Builds the link a notification points the user at. Supplied by the
/// caller so the core stays out of page-routing concerns.
pub type LinkBuilder = fn(&JoinRecord) -> String;

/// Creates one `PushNotification` per date in the policy plus one immediate
/// notification, for a single recipient. Each configured date becomes an
/// instant at the configured send time of day in the *recipient's* timezone.
/// Due or overdue notifications are delivered right away; future ones are
/// handed to the deferred-job queue keyed by the notification id.
pub async fn schedule_notifications(
    policy: &NotificationPolicy,
    occurrence_id: &ID,
    user: &User,
    link: String,
    ctx: &HuddleContext,
) -> anyhow::Result<()> {
    let now = ctx.sys.get_timestamp_millis();

    let mut send_times = Vec::with_capacity(policy.send_dates.len() + 1);
    for date in &policy.send_dates {
        match to_absolute(*date, ctx.config.send_time_of_day, user.timezone) {
            Ok(send_at) => send_times.push(send_at),
            // A send date falling in a DST gap for this recipient cannot be
            // scheduled; drop it rather than fail the whole publish
            Err(e) => warn!("Dropping unreachable send date for user {}: {}", user.id, e),
        }
    }
    // The audience is always notified immediately in addition to the
    // configured advance-notice dates
    send_times.push(now);

    for send_at in send_times {
        let notification = PushNotification::new(
            user.id.clone(),
            occurrence_id.clone(),
            policy.text.clone(),
            link.clone(),
            send_at,
            policy.channels,
        );
        ctx.repos.push_notifications.insert(&notification).await?;
        if send_at <= now {
            let _ = execute(
                DeliverNotificationUseCase {
                    notification_id: notification.id,
                },
                ctx,
            )
            .await;
        } else {
            ctx.job_queue.enqueue_at(&notification.id, send_at).await;
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_helpers::setup_test_context_at;
    use chrono::prelude::*;
    use huddle_domain::ChannelFlags;

    #[tokio::test]
    async fn creates_one_notification_per_date_plus_the_immediate_one() {
        // "Now" is 2021-09-01 12:00 UTC, the assignment is due in 10 days
        // and the policy asks for a reminder 3 days before that
        let now = Utc.ymd(2021, 9, 1).and_hms(12, 0, 0).timestamp_millis();
        let test = setup_test_context_at(now);
        let ctx = test.ctx.clone();
        let user = User::new("member@team.test");
        ctx.repos.users.insert(&user).await.unwrap();

        let policy = NotificationPolicy {
            send_dates: vec![NaiveDate::from_ymd(2021, 9, 8)],
            channels: ChannelFlags {
                email: true,
                ..Default::default()
            },
            text: "Assignment due".into(),
        };
        let occurrence_id = ID::new();
        schedule_notifications(&policy, &occurrence_id, &user, "/tasks/1".into(), &ctx)
            .await
            .unwrap();

        let notifications = ctx.repos.push_notifications.find_by_user(&user.id).await;
        assert_eq!(notifications.len(), 2);

        // The configured date is deferred: strictly in the future, queued,
        // not sent
        let deferred: Vec<_> = notifications.iter().filter(|n| !n.sent).collect();
        assert_eq!(deferred.len(), 1);
        assert!(deferred[0].send_at > now);
        assert_eq!(test.job_queue.pending_count(), 1);

        // The implicit entry was executed immediately
        assert_eq!(test.email.sent_count(), 1);
    }

    #[tokio::test]
    async fn send_instants_use_the_recipients_timezone() {
        let now = Utc.ymd(2021, 1, 1).and_hms(0, 0, 0).timestamp_millis();
        let test = setup_test_context_at(now);
        let ctx = test.ctx.clone();
        // 17:30 in New York in January is 22:30 UTC
        let mut user = User::new("member@team.test");
        user.timezone = chrono_tz::America::New_York;
        ctx.repos.users.insert(&user).await.unwrap();

        let policy = NotificationPolicy {
            send_dates: vec![NaiveDate::from_ymd(2021, 1, 11)],
            channels: Default::default(),
            text: "Reminder".into(),
        };
        schedule_notifications(&policy, &ID::new(), &user, "/tasks/1".into(), &ctx)
            .await
            .unwrap();

        let notifications = ctx.repos.push_notifications.find_by_user(&user.id).await;
        let deferred = notifications.iter().find(|n| n.send_at > now).unwrap();
        assert_eq!(
            deferred.send_at,
            Utc.ymd(2021, 1, 11).and_hms(22, 30, 0).timestamp_millis()
        );
    }
}
