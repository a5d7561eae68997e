use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::PersonId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Validation,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed roster data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate person id {0} in roster")]
    DuplicateId(PersonId),
}

impl RosterError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RosterError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                ErrorCode::NotFound
            }
            RosterError::Io { .. } => ErrorCode::Internal,
            RosterError::Parse(_) | RosterError::DuplicateId(_) => ErrorCode::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_message_names_the_value() {
        assert_eq!(
            UnknownRole("superuser".into()).to_string(),
            "unknown role 'superuser'"
        );
    }
}
