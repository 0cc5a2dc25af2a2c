mod audience;
mod expansion;
mod join_record;
mod notification;
mod occurrence;
mod shared;
mod template;
mod user;
pub mod wallclock;

pub use audience::AudienceSpec;
pub use expansion::expand_template;
pub use join_record::{JoinKind, JoinRecord, RecordRef, RsvpStatus, Watch, WatchPredicate};
pub use notification::{AppNotification, ChannelFlags, NotificationPolicy, PushNotification};
pub use occurrence::{Occurrence, OccurrenceKind};
pub use shared::entity::{Entity, ID};
pub use template::{Template, TemplateKind, TemplateValidationError};
pub use user::{Role, User};
pub use wallclock::{to_absolute, to_local, WallClockError};
