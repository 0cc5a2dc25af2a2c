pub mod assignment;
pub mod delete_occurrence;
pub mod publish_occurrence;

use huddle_domain::ID;
use huddle_infra::HuddleContext;

/// Deletes everything an occurrence owns: its join records, the task
/// back-references they left on users, and its pending notification jobs.
/// Cancelling jobs here and tolerating gone records in the delivery path
/// are both required; neither alone covers jobs already in flight.
pub(crate) async fn cascade_delete_occurrence(
    occurrence_id: &ID,
    ctx: &HuddleContext,
) -> anyhow::Result<()> {
    let removed = ctx
        .repos
        .join_records
        .delete_by_occurrence(occurrence_id)
        .await;
    for join_record in removed {
        if let Some(mut user) = ctx.repos.users.find(&join_record.user_id).await {
            if user.assigned_tasks.contains(&join_record.id) {
                user.assigned_tasks.retain(|task| task != &join_record.id);
                ctx.repos.users.save(&user).await?;
            }
        }
    }
    for notification in ctx
        .repos
        .push_notifications
        .delete_by_occurrence(occurrence_id)
        .await
    {
        ctx.job_queue.cancel(&notification.id).await;
    }
    Ok(())
}
