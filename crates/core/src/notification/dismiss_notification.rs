use crate::error::HuddleError;
use crate::shared::usecase::UseCase;
use huddle_domain::ID;
use huddle_infra::HuddleContext;

/// Removes one in-app notification from the user's embedded list. Other
/// notifications and the underlying `PushNotification` record are untouched.
#[derive(Debug)]
pub struct DismissAppNotificationUseCase {
    pub user_id: ID,
    pub app_notification_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    UserNotFound(ID),
    NotificationNotFound(ID),
    StorageError,
}

impl From<UseCaseErrors> for HuddleError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::UserNotFound(user_id) => {
                Self::NotFound(format!("The user with id: {}, was not found.", user_id))
            }
            UseCaseErrors::NotificationNotFound(id) => Self::NotFound(format!(
                "The notification with id: {}, was not found.",
                id
            )),
            UseCaseErrors::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DismissAppNotificationUseCase {
    type Response = ();

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &HuddleContext) -> Result<Self::Response, Self::Errors> {
        let mut user = ctx
            .repos
            .users
            .find(&self.user_id)
            .await
            .ok_or_else(|| UseCaseErrors::UserNotFound(self.user_id.clone()))?;

        let before = user.notifications.len();
        user.notifications
            .retain(|n| n.id != self.app_notification_id);
        if user.notifications.len() == before {
            return Err(UseCaseErrors::NotificationNotFound(
                self.app_notification_id.clone(),
            ));
        }

        ctx.repos
            .users
            .save(&user)
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
