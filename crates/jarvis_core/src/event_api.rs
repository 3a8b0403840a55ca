use crate::error::AppError;
use crate::model::{Document, Event};
use crate::timestamp::now_rfc3339;

pub fn add_event(document: &mut Document, title: &str) -> Result<Event, AppError> {
    if title.trim().is_empty() {
        return Err(AppError::invalid_input("title is required"));
    }

    let event = Event {
        id: document.allocate_event_id()?,
        title: title.to_string(),
        created: now_rfc3339()?,
    };
    tracing::debug!(id = event.id, "adding event");

    document.events.push(event.clone());
    Ok(event)
}

pub fn list_events(document: &Document) -> &[Event] {
    &document.events
}
