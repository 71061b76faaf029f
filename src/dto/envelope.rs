//! Uniform `{status, message, data}` wrapper returned by every operation.

use serde::{Deserialize, Serialize};

/// Outcome flag carried by an [`Envelope`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Response body of every `/selector` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: Status,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

impl<T> Envelope<Option<T>> {
    /// Collapses an optional payload so that `None` is reported as absent data.
    pub fn flatten(self) -> Envelope<T> {
        Envelope {
            status: self.status,
            message: self.message,
            data: self.data.flatten(),
        }
    }
}
