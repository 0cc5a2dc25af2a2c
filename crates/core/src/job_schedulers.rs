use crate::notification::deliver_notification::DeliverNotificationUseCase;
use crate::shared::usecase::execute;
use huddle_infra::HuddleContext;
use std::time::Duration;
use tokio::time::{interval, sleep};
use tracing::info;

pub fn get_start_delay(now_ts: usize, secs_before_min: usize) -> usize {
    let secs_to_next_minute = 60 - (now_ts / 1000) % 60;
    if secs_to_next_minute > secs_before_min {
        secs_to_next_minute - secs_before_min
    } else {
        secs_to_next_minute + (60 - secs_before_min)
    }
}

/// Delivery worker loop. Aligns itself to the minute boundary, then polls
/// the job queue every delivery interval and executes the due deliveries.
/// Runs until the enclosing task is dropped.
pub async fn run_notification_delivery_job(ctx: HuddleContext) {
    let now = ctx.sys.get_timestamp_millis();
    let secs_to_next_run = get_start_delay(now as usize, 0);
    sleep(Duration::from_secs(secs_to_next_run as u64)).await;

    let mut poll_interval = interval(Duration::from_secs(ctx.config.delivery_interval_secs));
    loop {
        poll_interval.tick().await;
        deliver_due_notifications(&ctx).await;
    }
}

async fn deliver_due_notifications(ctx: &HuddleContext) {
    let now = ctx.sys.get_timestamp_millis();
    let due = ctx.job_queue.take_due(now).await;
    if due.is_empty() {
        return;
    }
    info!("Delivering {} due notifications at {}", due.len(), now);

    for notification_id in due {
        // Delivery tolerates records deleted after scheduling, so any
        // remaining error is channel trouble already logged downstream.
        let _ = execute(
            DeliverNotificationUseCase { notification_id },
            ctx,
        )
        .await;
    }
}
