use thiserror::Error;

use crate::http::HttpError;

/// Message shown for any body that is not a non-empty array of users.
pub const DATA_FORMAT_MESSAGE: &str = "Invalid data format received from API";

/// Why loading the base list failed. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadUsersError {
    /// Network failure (`status` is `None`) or a non-2xx response.
    #[error("{message}")]
    Fetch { status: Option<u16>, message: String },
    #[error("{}", DATA_FORMAT_MESSAGE)]
    DataFormat,
}

impl LoadUsersError {
    pub fn http_status(status: u16) -> Self {
        Self::Fetch {
            status: Some(status),
            message: format!("HTTP error! status: {status}"),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status, .. } => *status,
            Self::DataFormat => None,
        }
    }

    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<HttpError> for LoadUsersError {
    fn from(err: HttpError) -> Self {
        Self::Fetch {
            status: None,
            message: err.message,
        }
    }
}
