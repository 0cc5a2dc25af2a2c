use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which delivery channels a notification should go out on.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelFlags {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
    pub in_app: bool,
}

/// When and how the audience of a `Template` or `Occurrence` should be
/// reminded. `send_dates` are plain calendar dates: the concrete send
/// instant is computed per recipient, in the recipient's own timezone.
///
/// Policies are always copied by value from a `Template` into the
/// `Occurrence`s it generates, so editing one occurrence's policy can
/// never leak back into the template.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPolicy {
    pub send_dates: Vec<NaiveDate>,
    pub channels: ChannelFlags,
    pub text: String,
}

/// A single scheduled delivery for one user. Created by the notification
/// scheduler and consumed exactly once by the delivery executor; only the
/// `sent` flag is ever mutated, and only from `false` to `true`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushNotification {
    pub id: ID,
    pub user_id: ID,
    /// The `Occurrence` this notification belongs to. Needed so that
    /// deleting an occurrence can cancel its pending deliveries.
    pub occurrence_id: ID,
    pub text: String,
    pub link: String,
    /// UTC millis at which this notification should be delivered
    pub send_at: i64,
    pub channels: ChannelFlags,
    pub sent: bool,
}

impl PushNotification {
    pub fn new(
        user_id: ID,
        occurrence_id: ID,
        text: String,
        link: String,
        send_at: i64,
        channels: ChannelFlags,
    ) -> Self {
        Self {
            id: Default::default(),
            user_id,
            occurrence_id,
            text,
            link,
            send_at,
            channels,
            sent: false,
        }
    }
}

impl Entity for PushNotification {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// The in-app delivery artifact, embedded in the `User` document. The user
/// can dismiss these independently of any other channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppNotification {
    pub id: ID,
    pub text: String,
    pub link: String,
    pub created_at: i64,
}
