use thiserror::Error;

/// Generic text shown when a request fails for reasons the user cannot act on.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}){}", detail(.message))]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Forbidden(String),
}

fn detail(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(": {message}")
    }
}

impl AppError {
    /// HTTP status carried by the error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            AppError::Unauthorized(_) => Some(401),
            AppError::Forbidden(_) => Some(403),
            AppError::NotFound(_) => Some(404),
            _ => None,
        }
    }

    /// Text safe to show in a transient banner.
    ///
    /// Messages the user can act on pass through; transport and server faults
    /// collapse to `fallback` unless the server supplied its own message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Unauthorized(message)
            | AppError::NotFound(message)
            | AppError::Validation(message)
            | AppError::Forbidden(message) => message.clone(),
            AppError::Http { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_omits_empty_http_message() {
        let bare = AppError::Http {
            status: 500,
            message: String::new(),
        };
        let detailed = AppError::Http {
            status: 422,
            message: "Name is too short".to_string(),
        };

        assert_eq!(bare.to_string(), "Request failed (500)");
        assert_eq!(detailed.to_string(), "Request failed (422): Name is too short");
    }

    #[test]
    fn user_message_hides_transport_details() {
        let network = AppError::Network("Unable to reach the server: TypeError".to_string());
        let timeout = AppError::Timeout("Request timed out. Please try again.".to_string());
        let parse = AppError::Parse("Failed to decode response: eof".to_string());

        assert_eq!(network.user_message(GENERIC_FAILURE), GENERIC_FAILURE);
        assert_eq!(timeout.user_message("Failed to load users."), "Failed to load users.");
        assert_eq!(parse.user_message(GENERIC_FAILURE), GENERIC_FAILURE);
    }

    #[test]
    fn user_message_prefers_server_and_local_messages() {
        let server = AppError::Http {
            status: 400,
            message: "Avatar URL is invalid".to_string(),
        };
        let silent_server = AppError::Http {
            status: 502,
            message: String::new(),
        };
        let validation = AppError::Validation("Email address looks invalid.".to_string());

        assert_eq!(server.user_message(GENERIC_FAILURE), "Avatar URL is invalid");
        assert_eq!(silent_server.user_message("Failed to update user."), "Failed to update user.");
        assert_eq!(validation.user_message(GENERIC_FAILURE), "Email address looks invalid.");
    }

    #[test]
    fn status_maps_typed_variants() {
        assert_eq!(AppError::Forbidden(String::new()).status(), Some(403));
        assert_eq!(AppError::NotFound(String::new()).status(), Some(404));
        assert_eq!(AppError::Validation(String::new()).status(), None);
    }
}
