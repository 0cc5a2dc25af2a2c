use crate::error::HuddleError;
use crate::shared::usecase::UseCase;
use huddle_domain::{AppNotification, ID};
use huddle_infra::HuddleContext;
use tracing::{info, warn};

/// Executes one scheduled delivery: sends through every enabled channel,
/// records the in-app notification and flips the `sent` flag. The job
/// runner redelivers at least once after a crash, so re-invocation on an
/// already sent record is a safe no-op; a record that has disappeared
/// (occurrence deleted before the job fired) is skipped silently.
#[derive(Debug)]
pub struct DeliverNotificationUseCase {
    pub notification_id: ID,
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

#[async_trait::async_trait(?Send)]
impl UseCase for DeliverNotificationUseCase {
    type Response = ();

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &HuddleContext) -> Result<Self::Response, Self::Errors> {
        let mut notification = match ctx.repos.push_notifications.find(&self.notification_id).await
        {
            Some(n) => n,
            None => {
                info!(
                    "Notification {} no longer exists, skipping delivery.",
                    self.notification_id
                );
                return Ok(());
            }
        };
        if notification.sent {
            return Ok(());
        }
        let mut user = match ctx.repos.users.find(&notification.user_id).await {
            Some(u) => u,
            None => {
                info!(
                    "User {} for notification {} no longer exists, skipping delivery.",
                    notification.user_id, self.notification_id
                );
                return Ok(());
            }
        };

        // Channels fail independently of each other, failures are operator
        // visible only
        if notification.channels.email {
            if let Err(e) = ctx.channels.email.send(&user.email, &notification.text).await {
                warn!("Email delivery failed for user {}: {:?}", user.id, e);
            }
        }
        if notification.channels.sms {
            match &user.phone {
                Some(phone) => {
                    if let Err(e) = ctx.channels.sms.send(phone, &notification.text).await {
                        warn!("Sms delivery failed for user {}: {:?}", user.id, e);
                    }
                }
                None => info!("User {} has no phone number, skipping sms.", user.id),
            }
        }
        if notification.channels.push {
            let address = user.id.as_string();
            if let Err(e) = ctx.channels.push.send(&address, &notification.text).await {
                warn!("Push delivery failed for user {}: {:?}", user.id, e);
            }
        }
        if notification.channels.in_app {
            user.notifications.push(AppNotification {
                id: Default::default(),
                text: notification.text.clone(),
                link: notification.link.clone(),
                created_at: ctx.sys.get_timestamp_millis(),
            });
            // A failed in-app write must not block the sent flag, or
            // redelivery would re-fire the other channels
            if let Err(e) = ctx.repos.users.save(&user).await {
                warn!("In-app delivery failed for user {}: {:?}", user.id, e);
            }
        }

        notification.sent = true;
        ctx.repos
            .push_notifications
            .save(&notification)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(())
    }
}
