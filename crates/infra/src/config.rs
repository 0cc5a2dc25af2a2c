use chrono::NaiveTime;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Local wall-clock time of day at which date-based reminders go out,
    /// in each recipient's own timezone
    pub send_time_of_day: NaiveTime,
    /// How often the delivery worker polls for due jobs, in seconds
    pub delivery_interval_secs: u64,
    /// Relay endpoints that own the actual channel mechanics. A missing url
    /// disables the channel (messages are logged and dropped).
    pub email_relay_url: Option<String>,
    pub sms_relay_url: Option<String>,
    pub push_relay_url: Option<String>,
    pub relay_key: String,
}

impl Config {
    pub fn new() -> Self {
        let default_send_time = NaiveTime::from_hms(17, 30, 0);
        let send_time_of_day = match std::env::var("SEND_TIME_OF_DAY") {
            Ok(raw) => match NaiveTime::parse_from_str(&raw, "%H:%M") {
                Ok(time) => time,
                Err(_) => {
                    warn!(
                        "The given SEND_TIME_OF_DAY: {} is not valid, falling back to 17:30.",
                        raw
                    );
                    default_send_time
                }
            },
            Err(_) => default_send_time,
        };

        let delivery_interval_secs = std::env::var("DELIVERY_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(60);

        Self {
            send_time_of_day,
            delivery_interval_secs,
            email_relay_url: std::env::var("EMAIL_RELAY_URL").ok(),
            sms_relay_url: std::env::var("SMS_RELAY_URL").ok(),
            push_relay_url: std::env::var("PUSH_RELAY_URL").ok(),
            relay_key: std::env::var("RELAY_KEY").unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
