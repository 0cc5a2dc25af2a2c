use super::IPushNotificationRepo;
use crate::repos::shared::inmemory_repo::*;
use huddle_domain::{PushNotification, ID};
use std::sync::Mutex;

pub struct InMemoryPushNotificationRepo {
    notifications: Mutex<Vec<PushNotification>>,
}

impl InMemoryPushNotificationRepo {
    pub fn new() -> Self {
        Self {
            notifications: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IPushNotificationRepo for InMemoryPushNotificationRepo {
    async fn insert(&self, notification: &PushNotification) -> anyhow::Result<()> {
        insert(notification, &self.notifications);
        Ok(())
    }

    async fn save(&self, notification: &PushNotification) -> anyhow::Result<()> {
        save(notification, &self.notifications);
        Ok(())
    }

    async fn find(&self, notification_id: &ID) -> Option<PushNotification> {
        find(notification_id, &self.notifications)
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<PushNotification> {
        find_by(&self.notifications, |n| &n.user_id == user_id)
    }

    async fn delete_by_occurrence(&self, occurrence_id: &ID) -> Vec<PushNotification> {
        find_and_delete_by(&self.notifications, |n| {
            &n.occurrence_id == occurrence_id
        })
    }
}
