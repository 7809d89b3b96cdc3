use thiserror::Error;

use crate::event::types::EventType;

/// Listener system errors with structured error types
#[derive(Debug, Error, Clone)]
pub enum EventError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Security error: {0}")]
    Security(String),

    #[error("Listener '{listener}' failed during {event_type:?}: {message}")]
    ListenerFailed {
        listener: &'static str,
        event_type: EventType,
        message: String,
    },

    #[error("Duplicate listener '{listener}' registered for {event_type:?}")]
    DuplicateListener {
        listener: String,
        event_type: EventType,
    },

    #[error("System error: {0}")]
    System(String),
}
