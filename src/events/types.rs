/**
 * Event Wire Types
 *
 * The fixed event-kind enumeration and the request/response types for
 * the event endpoints. The kind is validated here, at the boundary,
 * instead of trusting free-form strings at each call site; storage keeps
 * the kebab-case string form.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::AppError;
use crate::events::db::{Event, EventWithOrganizerRow};

/// Fixed enumeration of event kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Hackathon,
    TechTalk,
    Workshop,
}

impl EventKind {
    /// Kebab-case string form, as stored and sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hackathon => "hackathon",
            Self::TechTalk => "tech-talk",
            Self::Workshop => "workshop",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hackathon" => Ok(Self::Hackathon),
            "tech-talk" => Ok(Self::TechTalk),
            "workshop" => Ok(Self::Workshop),
            other => Err(AppError::Validation(format!(
                "Unknown event type: {}",
                other
            ))),
        }
    }
}

/// Event submission request
///
/// Required string fields default to empty when absent so missing and
/// blank fields validate identically. The date travels as RFC 3339 and
/// is parsed during validation.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct SubmitEventRequest {
    pub name: String,
    /// Event date/time, RFC 3339
    pub date: String,
    /// One of `hackathon`, `tech-talk`, `workshop`
    #[serde(rename = "type")]
    pub event_type: String,
    pub location: String,
    pub college: Option<String>,
    pub link: String,
    pub description: String,
    pub contact: Option<String>,
    pub image_url: Option<String>,
}

impl SubmitEventRequest {
    /// Validate the submission, returning the parsed kind and date
    pub fn validate(&self) -> Result<(EventKind, DateTime<Utc>), AppError> {
        if self.name.is_empty()
            || self.date.is_empty()
            || self.event_type.is_empty()
            || self.location.is_empty()
            || self.link.is_empty()
            || self.description.is_empty()
        {
            return Err(AppError::Validation(
                "Required fields are missing".to_string(),
            ));
        }

        let kind = self.event_type.parse::<EventKind>()?;

        let date = DateTime::parse_from_rfc3339(&self.date)
            .map(|d| d.with_timezone(&Utc))
            .map_err(|_| {
                AppError::Validation("Date must be a valid RFC 3339 timestamp".to_string())
            })?;

        Ok((kind, date))
    }
}

/// Event as returned by the listing endpoints
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EventResponse {
    pub id: Uuid,
    pub name: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub location: String,
    pub college: Option<String>,
    pub link: String,
    pub description: String,
    pub contact: Option<String>,
    pub image_url: Option<String>,
    pub user_id: Uuid,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            date: event.date,
            event_type: event.event_type,
            location: event.location,
            college: event.college,
            link: event.link,
            description: event.description,
            contact: event.contact,
            image_url: event.image_url,
            user_id: event.user_id,
        }
    }
}

/// Organizer name shown on the event detail view
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Organizer {
    pub first_name: String,
    pub last_name: String,
}

/// Event detail with its organizer
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EventDetailResponse {
    #[serde(flatten)]
    pub event: EventResponse,
    pub organizer: Organizer,
}

impl From<EventWithOrganizerRow> for EventDetailResponse {
    fn from(row: EventWithOrganizerRow) -> Self {
        Self {
            organizer: Organizer {
                first_name: row.organizer_first_name,
                last_name: row.organizer_last_name,
            },
            event: EventResponse {
                id: row.id,
                name: row.name,
                date: row.date,
                event_type: row.event_type,
                location: row.location,
                college: row.college,
                link: row.link,
                description: row.description,
                contact: row.contact,
                image_url: row.image_url,
                user_id: row.user_id,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SubmitEventRequest {
        SubmitEventRequest {
            name: "RustConf Hack Night".to_string(),
            date: "2026-09-12T18:00:00Z".to_string(),
            event_type: "hackathon".to_string(),
            location: "Berlin".to_string(),
            college: None,
            link: "https://example.com/hack-night".to_string(),
            description: "An evening of hacking".to_string(),
            contact: None,
            image_url: None,
        }
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in [EventKind::Hackathon, EventKind::TechTalk, EventKind::Workshop] {
            assert_eq!(kind.as_str().parse::<EventKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(matches!(
            "concert".parse::<EventKind>(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&EventKind::TechTalk).unwrap();
        assert_eq!(json, r#""tech-talk""#);
    }

    #[test]
    fn test_valid_submission() {
        let (kind, date) = valid_request().validate().unwrap();
        assert_eq!(kind, EventKind::Hackathon);
        assert_eq!(date.to_rfc3339(), "2026-09-12T18:00:00+00:00");
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let request = SubmitEventRequest {
            location: String::new(),
            ..valid_request()
        };
        assert!(matches!(
            request.validate(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_bad_date_rejected() {
        let request = SubmitEventRequest {
            date: "next tuesday".to_string(),
            ..valid_request()
        };
        assert!(matches!(request.validate(), Err(AppError::Validation(_))));
    }
}
