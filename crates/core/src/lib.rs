mod error;
pub mod job_schedulers;
pub mod join_record;
pub mod notification;
pub mod occurrence;
pub mod shared;
pub mod template;
pub mod watcher;

pub use error::HuddleError;
pub use shared::usecase::execute;
