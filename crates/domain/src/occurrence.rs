use crate::audience::AudienceSpec;
use crate::notification::NotificationPolicy;
use crate::shared::entity::{Entity, ID};
use crate::template::TemplateKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum OccurrenceKind {
    Event {
        rsvp_enabled: bool,
        attendance_enabled: bool,
    },
    Assignment,
}

impl From<TemplateKind> for OccurrenceKind {
    fn from(kind: TemplateKind) -> Self {
        match kind {
            TemplateKind::Event {
                rsvp_enabled,
                attendance_enabled,
            } => OccurrenceKind::Event {
                rsvp_enabled,
                attendance_enabled,
            },
            TemplateKind::Assignment => OccurrenceKind::Assignment,
        }
    }
}

/// One concrete dated instance: either generated from a `Template` at
/// publish time, or authored directly as a one-off item (`template_id` is
/// `None` in that case). Immutable after publish except through its owning
/// template's pre-publish edit flow. Owns its `JoinRecord`s.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub id: ID,
    pub name: String,
    pub content: String,
    pub kind: OccurrenceKind,
    /// UTC millis
    pub start_ts: i64,
    pub end_ts: i64,
    pub template_id: Option<ID>,
    pub is_draft: bool,
    /// By-value copy of the template's policy, never shared by reference
    pub policy: NotificationPolicy,
    /// Audience snapshot taken at publish time
    pub audience: AudienceSpec,
}

impl Occurrence {
    pub fn rsvp_enabled(&self) -> bool {
        matches!(
            self.kind,
            OccurrenceKind::Event {
                rsvp_enabled: true,
                ..
            }
        )
    }
}

impl Entity for Occurrence {
    fn id(&self) -> &ID {
        &self.id
    }
}
