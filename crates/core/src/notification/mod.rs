pub mod deliver_notification;
pub mod dismiss_notification;
pub mod schedule;
