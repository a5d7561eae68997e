//! UI/backend events and error modeling for the admin dashboard controller.

use std::path::PathBuf;

use shared::{
    domain::PersonRecord,
    error::{ErrorCode, RosterError},
};

#[derive(Debug)]
pub enum UiEvent {
    RosterLoaded {
        path: PathBuf,
        people: Vec<PersonRecord>,
    },
    Info(String),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Missing,
    Validation,
    Transport,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LoadRoster,
    RoleChange,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_roster_error(context: UiErrorContext, err: &RosterError) -> Self {
        let category = match err.code() {
            ErrorCode::NotFound => UiErrorCategory::Missing,
            ErrorCode::Validation => UiErrorCategory::Validation,
            ErrorCode::Internal => UiErrorCategory::Unknown,
        };
        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("not found")
            || message_lower.contains("no such file")
        {
            UiErrorCategory::Missing
        } else if message_lower.contains("invalid")
            || message_lower.contains("malformed")
            || message_lower.contains("duplicate")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("disconnected")
            || message_lower.contains("queue is full")
            || message_lower.contains("channel closed")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    /// Whether retrying the same action can help without user changes.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category,
            UiErrorCategory::Transport | UiErrorCategory::Unknown
        )
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Missing => "Missing roster",
        UiErrorCategory::Validation => "Invalid roster",
        UiErrorCategory::Transport => "Worker",
        UiErrorCategory::Unknown => "Unexpected",
    }
}
