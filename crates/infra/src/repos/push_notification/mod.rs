mod inmemory;

pub use inmemory::InMemoryPushNotificationRepo;

use huddle_domain::{PushNotification, ID};

#[async_trait::async_trait]
pub trait IPushNotificationRepo: Send + Sync {
    async fn insert(&self, notification: &PushNotification) -> anyhow::Result<()>;
    async fn save(&self, notification: &PushNotification) -> anyhow::Result<()>;
    async fn find(&self, notification_id: &ID) -> Option<PushNotification>;
    async fn find_by_user(&self, user_id: &ID) -> Vec<PushNotification>;
    async fn delete_by_occurrence(&self, occurrence_id: &ID) -> Vec<PushNotification>;
}
