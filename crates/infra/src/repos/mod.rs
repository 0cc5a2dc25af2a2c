mod join_record;
mod occurrence;
mod push_notification;
mod role;
mod shared;
mod template;
mod user;

use join_record::InMemoryJoinRecordRepo;
use occurrence::InMemoryOccurrenceRepo;
use push_notification::InMemoryPushNotificationRepo;
use role::InMemoryRoleRepo;
use std::sync::Arc;
use template::InMemoryTemplateRepo;
use user::InMemoryUserRepo;

pub use join_record::IJoinRecordRepo;
pub use occurrence::IOccurrenceRepo;
pub use push_notification::IPushNotificationRepo;
pub use role::IRoleRepo;
pub use template::ITemplateRepo;
pub use user::IUserRepo;

#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn IUserRepo>,
    pub roles: Arc<dyn IRoleRepo>,
    pub templates: Arc<dyn ITemplateRepo>,
    pub occurrences: Arc<dyn IOccurrenceRepo>,
    pub join_records: Arc<dyn IJoinRecordRepo>,
    pub push_notifications: Arc<dyn IPushNotificationRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepo::new()),
            roles: Arc::new(InMemoryRoleRepo::new()),
            templates: Arc::new(InMemoryTemplateRepo::new()),
            occurrences: Arc::new(InMemoryOccurrenceRepo::new()),
            join_records: Arc::new(InMemoryJoinRecordRepo::new()),
            push_notifications: Arc::new(InMemoryPushNotificationRepo::new()),
        }
    }
}
