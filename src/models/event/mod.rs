// Event module
// Scheduled calendar event model and the draft sent on creation

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::category::{is_valid_hex_color, Category};

/// A concrete scheduled occurrence rendered as a block in the week grid.
///
/// The identifier is assigned by the document store and treated as an
/// opaque string; events built locally carry `None` until the store
/// confirms the create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub category: Category,
    #[serde(rename = "startTime")]
    pub start: DateTime<Local>,
    #[serde(rename = "endTime")]
    pub end: DateTime<Local>,
    /// Explicit color override; wins over the category color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Local>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Local>>,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `title` - Event title (required, non-empty)
    /// * `start` - Event start time
    /// * `end` - Event end time
    ///
    /// # Returns
    /// Returns `Result<Event, String>` with validation
    pub fn new(
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Self, String> {
        let title = title.into();

        // Validate title
        if title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        // Validate times
        if end <= start {
            return Err("Event end time must be after start time".to_string());
        }

        Ok(Self {
            id: None,
            title,
            category: Category::default(),
            start,
            end,
            color: None,
            location: None,
            description: None,
            created_at: None,
            updated_at: None,
        })
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if self.end <= self.start {
            return Err("Event end time must be after start time".to_string());
        }

        // Validate color format if present (should be hex color)
        if let Some(ref color) = self.color {
            if !is_valid_hex_color(color) {
                return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
            }
        }

        Ok(())
    }

    /// Get the duration of the event
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }

    /// Color the event renders with: the explicit override when present,
    /// otherwise the category color.
    pub fn display_color(&self) -> &str {
        self.color.as_deref().unwrap_or_else(|| self.category.color())
    }
}

/// The fields sent to the document store when creating an event: an
/// [`Event`] minus the server-assigned identifier and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub category: Category,
    #[serde(rename = "startTime")]
    pub start: DateTime<Local>,
    #[serde(rename = "endTime")]
    pub end: DateTime<Local>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EventDraft {
    /// Validate the draft before it is submitted.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }
        if self.end <= self.start {
            return Err("Event end time must be after start time".to_string());
        }
        if let Some(ref color) = self.color {
            if !is_valid_hex_color(color) {
                return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
            }
        }
        Ok(())
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    title: Option<String>,
    category: Option<Category>,
    start: Option<DateTime<Local>>,
    end: Option<DateTime<Local>>,
    color: Option<String>,
    location: Option<String>,
    description: Option<String>,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self {
            title: None,
            category: None,
            start: None,
            end: None,
            color: None,
            location: None,
            description: None,
        }
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the event category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the start time
    pub fn start(mut self, start: DateTime<Local>) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end time
    pub fn end(mut self, end: DateTime<Local>) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the event color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the event location
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the event description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let title = self.title.ok_or("Event title is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        let event = Event {
            id: None,
            title,
            category: self.category.unwrap_or_default(),
            start,
            end,
            color: self.color,
            location: self.location,
            description: self.description,
            created_at: None,
            updated_at: None,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample_start() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 2, 5, 9, 0, 0).unwrap()
    }

    fn sample_end() -> DateTime<Local> {
        sample_start() + Duration::hours(1)
    }

    #[test]
    fn test_new_event_success() {
        let start = sample_start();
        let end = sample_end();
        let result = Event::new("Meeting", start, end);

        assert!(result.is_ok());
        let event = result.unwrap();
        assert_eq!(event.title, "Meeting");
        assert_eq!(event.start, start);
        assert_eq!(event.end, end);
        assert_eq!(event.category, Category::Work);
        assert!(event.id.is_none());
        assert!(event.color.is_none());
    }

    #[test]
    fn test_new_event_empty_title() {
        let result = Event::new("", sample_start(), sample_end());
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Event title cannot be empty");
    }

    #[test]
    fn test_new_event_whitespace_title() {
        let result = Event::new("   ", sample_start(), sample_end());
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Event title cannot be empty");
    }

    #[test]
    fn test_new_event_invalid_times() {
        let start = sample_start();
        let end = start - Duration::hours(1);
        let result = Event::new("Meeting", start, end);

        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err(),
            "Event end time must be after start time"
        );
    }

    #[test]
    fn test_new_event_equal_times() {
        let start = sample_start();
        let result = Event::new("Meeting", start, start);

        assert!(result.is_err());
    }

    #[test]
    fn test_builder_with_optional_fields() {
        let start = sample_start();
        let end = sample_end();

        let event = Event::builder()
            .title("Morning Run")
            .category(Category::Exercise)
            .start(start)
            .end(end)
            .color("#FF5733")
            .location("Riverside Park")
            .description("5k loop")
            .build()
            .unwrap();

        assert_eq!(event.title, "Morning Run");
        assert_eq!(event.category, Category::Exercise);
        assert_eq!(event.color, Some("#FF5733".to_string()));
        assert_eq!(event.location, Some("Riverside Park".to_string()));
        assert_eq!(event.description, Some("5k loop".to_string()));
    }

    #[test]
    fn test_builder_missing_title() {
        let result = Event::builder()
            .start(sample_start())
            .end(sample_end())
            .build();

        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Event title is required");
    }

    #[test]
    fn test_builder_missing_start() {
        let result = Event::builder().title("Meeting").end(sample_end()).build();

        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Event start time is required");
    }

    #[test]
    fn test_validate_invalid_color() {
        let mut event = Event::new("Meeting", sample_start(), sample_end()).unwrap();
        event.color = Some("red".to_string());

        let result = event.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("hex format"));
    }

    #[test]
    fn test_validate_valid_color_short() {
        let mut event = Event::new("Meeting", sample_start(), sample_end()).unwrap();
        event.color = Some("#F57".to_string());
        assert!(event.validate().is_ok());
    }

    #[test]
    fn test_duration() {
        let start = sample_start();
        let end = start + Duration::hours(2);
        let event = Event::new("Meeting", start, end).unwrap();

        assert_eq!(event.duration(), Duration::hours(2));
    }

    #[test]
    fn test_display_color_falls_back_to_category() {
        let event = Event::builder()
            .title("Lunch")
            .category(Category::Eating)
            .start(sample_start())
            .end(sample_end())
            .build()
            .unwrap();

        assert_eq!(event.display_color(), "#EAB308");
    }

    #[test]
    fn test_display_color_prefers_explicit_override() {
        let event = Event::builder()
            .title("Lunch")
            .category(Category::Eating)
            .start(sample_start())
            .end(sample_end())
            .color("#123456")
            .build()
            .unwrap();

        assert_eq!(event.display_color(), "#123456");
    }

    #[test]
    fn test_wire_field_names() {
        let mut event = Event::new("Standup", sample_start(), sample_end()).unwrap();
        event.id = Some("abc123".to_string());

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["_id"], "abc123");
        assert_eq!(value["category"], "work");
        assert!(value.get("startTime").is_some());
        assert!(value.get("endTime").is_some());
        assert!(value.get("start").is_none());
        assert!(value.get("color").is_none());

        let back: Event = serde_json::from_value(value).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_deserialize_store_payload() {
        let json = r##"{
            "_id": "65bf2a",
            "title": "Write report",
            "category": "work",
            "startTime": "2024-02-05T10:00:00.000Z",
            "endTime": "2024-02-05T11:00:00.000Z",
            "color": "#3B82F6"
        }"##;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id.as_deref(), Some("65bf2a"));
        assert_eq!(event.category, Category::Work);
        assert_eq!(event.duration(), Duration::hours(1));
        assert_eq!(event.color.as_deref(), Some("#3B82F6"));
        assert!(event.created_at.is_none());
    }

    #[test]
    fn test_draft_validate_empty_title() {
        let draft = EventDraft {
            title: "  ".to_string(),
            category: Category::Work,
            start: sample_start(),
            end: sample_end(),
            color: None,
            location: None,
            description: None,
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_draft_serializes_without_id_or_timestamps() {
        let draft = EventDraft {
            title: "Write report".to_string(),
            category: Category::Work,
            start: sample_start(),
            end: sample_end(),
            color: Some("#3B82F6".to_string()),
            location: None,
            description: None,
        };

        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("_id").is_none());
        assert!(value.get("createdAt").is_none());
        assert_eq!(value["title"], "Write report");
        assert_eq!(value["color"], "#3B82F6");
    }
}
