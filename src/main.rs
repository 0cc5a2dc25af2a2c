mod telemetry;

use huddle_core::job_schedulers::run_notification_delivery_job;
use huddle_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};
use tracing::info;

#[tokio::main]
async fn main() {
    let subscriber = get_subscriber("huddle_worker".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context();
    info!(
        "Starting notification delivery worker, polling every {}s",
        context.config.delivery_interval_secs
    );

    tokio::select! {
        _ = run_notification_delivery_job(context) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down");
        }
    }
}
