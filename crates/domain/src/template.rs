use crate::audience::AudienceSpec;
use crate::notification::NotificationPolicy;
use crate::shared::entity::{Entity, ID};
use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Weekday indices used by `Template::days_of_week`: 0 = Monday, 6 = Sunday.
/// Matches `chrono::Weekday::num_days_from_monday`.
pub const WEEKDAYS: u32 = 7;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum TemplateKind {
    Event {
        rsvp_enabled: bool,
        attendance_enabled: bool,
    },
    Assignment,
}

#[derive(Error, Debug, PartialEq)]
pub enum TemplateValidationError {
    #[error("End date cannot be before start date")]
    EndDateBeforeStartDate,
    #[error("End time must be after start time")]
    EndTimeNotAfterStartTime,
    #[error("The template must occur on at least one day of the week")]
    EmptyDaysOfWeek,
    #[error("{0} is not a valid day of the week")]
    InvalidDayOfWeek(u32),
}

/// The authoring-time definition of a recurring event or assignment. A
/// template is mutable while `is_draft` is true; publish flips the flag
/// (one way) and expands the template into concrete `Occurrence`s. After
/// publish the template only exists as the parent of its occurrences and
/// is deleted together with them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: ID,
    pub name: String,
    pub content: String,
    pub kind: TemplateKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Local wall-clock start of every occurrence, date independent
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Weekday indices, 0 = Monday
    pub days_of_week: Vec<u32>,
    /// The author's timezone; occurrence instants are anchored to it
    pub timezone: Tz,
    pub is_draft: bool,
    pub policy: NotificationPolicy,
    pub audience: AudienceSpec,
}

impl Template {
    pub fn occurs_on(&self, weekday_from_monday: u32) -> bool {
        self.days_of_week.contains(&weekday_from_monday)
    }

    /// Checks the shape of the template before expansion. A valid template
    /// may still produce zero occurrences when no date in its range falls
    /// on a listed weekday; that is allowed.
    pub fn validate(&self) -> Result<(), TemplateValidationError> {
        if self.end_date < self.start_date {
            return Err(TemplateValidationError::EndDateBeforeStartDate);
        }
        // Same-day interval, which also keeps every occurrence under 24h
        if self.end_time <= self.start_time {
            return Err(TemplateValidationError::EndTimeNotAfterStartTime);
        }
        if self.days_of_week.is_empty() {
            return Err(TemplateValidationError::EmptyDaysOfWeek);
        }
        for day in &self.days_of_week {
            if *day >= WEEKDAYS {
                return Err(TemplateValidationError::InvalidDayOfWeek(*day));
            }
        }
        Ok(())
    }
}

impl Entity for Template {
    fn id(&self) -> &ID {
        &self.id
    }
}
