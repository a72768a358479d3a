use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::event::application::domain::entities::{Event, EventRole, DEFAULT_EVENT_DESCRIPTION};
use crate::event::application::ports::outgoing::NewLocation;
use crate::group::application::domain::entities::GroupId;
use crate::shared::validation::{
    check_max_len, check_name_boundaries, parse_datetime, required, required_datetime, FieldErrors,
};
use crate::user::application::domain::entities::UserId;

pub const MAX_EVENT_TITLE_LEN: usize = 150;
pub const MAX_EVENT_DESCRIPTION_LEN: usize = 500;
pub const MAX_EVENT_MODE_LEN: usize = 255;
const MAX_ADDRESS_LEN: usize = 255;
const MAX_REGION_LEN: usize = 100;

pub(crate) const EVENT_ROLE_MSG: &str = "Role must be one of: organizer, speaker, participant.";

#[derive(Debug, Clone, Default)]
pub struct LocationForm {
    pub address: String,
    pub city: String,
    pub state: Option<String>,
    pub country: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct AttendeeForm {
    pub username: String,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateEventForm {
    pub title: String,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub mode: String,
    pub group_id: Option<i32>,
    pub location: LocationForm,
    pub attendees: Vec<AttendeeForm>,
    pub tags: Vec<i32>,
}

#[derive(Debug, Clone)]
pub struct CreateEventCommand {
    title: String,
    description: String,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
    mode: String,
    group_id: Option<GroupId>,
    location: NewLocation,
    attendees: Vec<(String, EventRole)>,
    tags: Vec<i32>,
}

/// Field name used for the `index`-th attendee entry.
pub(crate) fn attendee_field(index: usize, field: &str) -> String {
    format!("attendees[{index}].{field}")
}

pub(crate) fn parse_event_role(
    errors: &mut FieldErrors,
    field: &str,
    role: Option<&str>,
) -> Option<EventRole> {
    match role {
        None => Some(EventRole::Participant),
        Some(value) => {
            let parsed = EventRole::parse(value);
            if parsed.is_none() {
                errors.add(field, EVENT_ROLE_MSG);
            }
            parsed
        }
    }
}

fn validate_location(errors: &mut FieldErrors, form: &LocationForm) -> NewLocation {
    let mut text = |field: &str, label: &str, value: &str, max: usize| -> String {
        let key = format!("location.{field}");
        required(errors, &key, value)
            .filter(|v| check_max_len(errors, &key, label, v, max))
            .map(str::to_string)
            .unwrap_or_default()
    };

    let address = text("address", "Address", &form.address, MAX_ADDRESS_LEN);
    let city = text("city", "City", &form.city, MAX_REGION_LEN);
    let country = text("country", "Country", &form.country, MAX_REGION_LEN);

    let state = form.state.as_deref().unwrap_or("").trim();
    check_max_len(errors, "location.state", "State", state, MAX_REGION_LEN);

    if form.latitude.is_some_and(|lat| !(-90.0..=90.0).contains(&lat)) {
        errors.add("location.latitude", "Latitude must be between -90 and 90.");
    }
    if form.longitude.is_some_and(|lon| !(-180.0..=180.0).contains(&lon)) {
        errors.add("location.longitude", "Longitude must be between -180 and 180.");
    }

    NewLocation {
        address,
        city,
        state: state.to_string(),
        country,
        latitude: form.latitude,
        longitude: form.longitude,
    }
}

impl CreateEventCommand {
    pub fn new(form: CreateEventForm) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = required(&mut errors, "title", &form.title)
            .filter(|v| check_max_len(&mut errors, "title", "Title", v, MAX_EVENT_TITLE_LEN))
            .filter(|v| check_name_boundaries(&mut errors, "title", "Title", v))
            .map(str::to_string);

        let description = form.description.as_deref().unwrap_or("").trim();
        let description = if description.is_empty() {
            Some(DEFAULT_EVENT_DESCRIPTION.to_string())
        } else {
            check_max_len(
                &mut errors,
                "description",
                "Description",
                description,
                MAX_EVENT_DESCRIPTION_LEN,
            )
            .then(|| description.to_string())
        };

        let start_date = required_datetime(&mut errors, "start_date", &form.start_date);
        let end_date = match form.end_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => {
                let parsed = parse_datetime(value);
                if parsed.is_none() {
                    errors.add("end_date", "Not a valid datetime value.");
                }
                parsed
            }
        };
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if start > end {
                errors.add("start_date", "Start date cannot be greater than end date.");
            }
        }

        let mode = required(&mut errors, "mode", &form.mode)
            .filter(|v| check_max_len(&mut errors, "mode", "Mode", v, MAX_EVENT_MODE_LEN))
            .map(str::to_string);

        let location = validate_location(&mut errors, &form.location);

        let mut seen = HashSet::new();
        let mut attendees = Vec::with_capacity(form.attendees.len());
        for (index, entry) in form.attendees.iter().enumerate() {
            let username_field = attendee_field(index, "username");
            let username = required(&mut errors, &username_field, &entry.username);
            if let Some(name) = username {
                if !seen.insert(name.to_string()) {
                    errors.add(
                        username_field.as_str(),
                        format!("User '{name}' is listed more than once."),
                    );
                }
            }

            let role = parse_event_role(
                &mut errors,
                &attendee_field(index, "role"),
                entry.role.as_deref(),
            );

            if let (Some(name), Some(role)) = (username, role) {
                attendees.push((name.to_string(), role));
            }
        }

        errors.into_result()?;

        Ok(Self {
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
            start_date: start_date.unwrap_or_default(),
            end_date,
            mode: mode.unwrap_or_default(),
            group_id: form.group_id.map(GroupId::from),
            location,
            attendees,
            tags: form.tags,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        self.end_date
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn group_id(&self) -> Option<GroupId> {
        self.group_id
    }

    pub fn location(&self) -> &NewLocation {
        &self.location
    }

    /// Usernames with their requested roles, in submission order.
    pub fn attendees(&self) -> &[(String, EventRole)] {
        &self.attendees
    }

    pub fn tags(&self) -> &[i32] {
        &self.tags
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateEventError {
    #[error("Event rejected: {0}")]
    Validation(FieldErrors),

    #[error("Attendee added concurrently")]
    DuplicateAttendee,

    /// The caller's account was deleted after their token was issued.
    #[error("Owner account no longer exists")]
    OwnerNotFound,

    #[error("A referenced group or user disappeared during creation")]
    ReferenceNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateEventUseCase: Send + Sync {
    async fn execute(
        &self,
        owner_id: UserId,
        command: CreateEventCommand,
    ) -> Result<Event, CreateEventError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn form() -> CreateEventForm {
        CreateEventForm {
            title: "Morning Run".to_string(),
            start_date: "2024-01-01 07:00".to_string(),
            mode: "in person".to_string(),
            location: LocationForm {
                address: "1 Lake Rd".to_string(),
                city: "Springfield".to_string(),
                country: "US".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn minimal_form_gets_defaults() {
        let command = CreateEventCommand::new(form()).unwrap();

        assert_eq!(command.description(), "No description");
        assert_eq!(command.start_date().hour(), 7);
        assert!(command.end_date().is_none());
        assert!(command.group_id().is_none());
        assert_eq!(command.location().state, "");
    }

    #[test]
    fn start_after_end_is_attached_to_start_date() {
        let errors = CreateEventCommand::new(CreateEventForm {
            start_date: "2024-01-02".to_string(),
            end_date: Some("2024-01-01".to_string()),
            ..form()
        })
        .unwrap_err();

        assert_eq!(
            errors.get("start_date"),
            Some(&["Start date cannot be greater than end date.".to_string()][..])
        );
        assert!(!errors.has("end_date"));
    }

    #[test]
    fn equal_dates_are_fine() {
        let command = CreateEventCommand::new(CreateEventForm {
            start_date: "2024-01-01".to_string(),
            end_date: Some("2024-01-01T00:00:00Z".to_string()),
            ..form()
        })
        .unwrap();
        assert_eq!(command.end_date().map(|d| d.day()), Some(1));
    }

    #[test]
    fn bad_dates_and_missing_fields_are_collected() {
        let errors = CreateEventCommand::new(CreateEventForm {
            title: "_run".to_string(),
            start_date: "tomorrow".to_string(),
            end_date: Some("later".to_string()),
            mode: " ".to_string(),
            location: LocationForm::default(),
            ..Default::default()
        })
        .unwrap_err();

        assert_eq!(
            errors.get("title"),
            Some(&["Title cannot begin with that character.".to_string()][..])
        );
        assert_eq!(
            errors.get("start_date"),
            Some(&["Not a valid datetime value.".to_string()][..])
        );
        assert!(errors.has("end_date"));
        assert!(errors.has("mode"));
        assert!(errors.has("location.address"));
        assert!(errors.has("location.city"));
        assert!(errors.has("location.country"));
        assert!(!errors.has("location.state"));
    }

    #[test]
    fn coordinates_are_range_checked() {
        let mut f = form();
        f.location.latitude = Some(91.0);
        f.location.longitude = Some(-180.0);

        let errors = CreateEventCommand::new(f).unwrap_err();
        assert!(errors.has("location.latitude"));
        assert!(!errors.has("location.longitude"));
    }

    #[test]
    fn attendee_errors_carry_their_index() {
        let errors = CreateEventCommand::new(CreateEventForm {
            attendees: vec![
                AttendeeForm {
                    username: "bob".to_string(),
                    role: Some("speaker".to_string()),
                },
                AttendeeForm {
                    username: "bob".to_string(),
                    role: None,
                },
                AttendeeForm {
                    username: "carol".to_string(),
                    role: Some("host".to_string()),
                },
            ],
            ..form()
        })
        .unwrap_err();

        assert!(!errors.has("attendees[0].username"));
        assert_eq!(
            errors.get("attendees[1].username"),
            Some(&["User 'bob' is listed more than once.".to_string()][..])
        );
        assert_eq!(
            errors.get("attendees[2].role"),
            Some(&[EVENT_ROLE_MSG.to_string()][..])
        );
    }

    #[test]
    fn attendee_role_defaults_to_participant() {
        let command = CreateEventCommand::new(CreateEventForm {
            attendees: vec![AttendeeForm {
                username: "bob".to_string(),
                role: None,
            }],
            ..form()
        })
        .unwrap();

        assert_eq!(
            command.attendees(),
            &[("bob".to_string(), EventRole::Participant)][..]
        );
    }
}
