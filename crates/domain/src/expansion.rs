use crate::occurrence::Occurrence;
use crate::template::Template;
use crate::wallclock::{to_absolute, WallClockError};
use chrono::{Datelike, Duration};

/// Expands a validated `Template` into its dated `Occurrence`s: every
/// calendar date from `start_date` to `end_date` inclusive whose weekday is
/// in `days_of_week` yields one occurrence, anchored to the author's
/// timezone. The result is ordered by ascending start and may legitimately
/// be empty for a narrow date range.
///
/// Expansion must run exactly once per template: the publish flow guards it
/// with the one-way draft -> published transition.
pub fn expand_template(template: &Template) -> Result<Vec<Occurrence>, WallClockError> {
    let mut occurrences = Vec::new();
    let mut date = template.start_date;
    while date <= template.end_date {
        if template.occurs_on(date.weekday().num_days_from_monday()) {
            let start_ts = to_absolute(date, template.start_time, template.timezone)?;
            let end_ts = to_absolute(date, template.end_time, template.timezone)?;
            occurrences.push(Occurrence {
                id: Default::default(),
                name: template.name.clone(),
                content: template.content.clone(),
                kind: template.kind.into(),
                start_ts,
                end_ts,
                template_id: Some(template.id.clone()),
                is_draft: false,
                // By-value copy so per-occurrence edits never reach the template
                policy: template.policy.clone(),
                audience: template.audience.clone(),
            });
        }
        date = date + Duration::days(1);
    }
    Ok(occurrences)
}
