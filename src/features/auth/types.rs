//! Request and response types for the auth endpoints. Requests carry
//! passwords and responses carry the bearer token, so none of these are logged.

use crate::features::users::types::UserRecord;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserRecord,
}

/// The signed-in state kept for the lifetime of the tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub cached_user: Option<UserRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn auth_response_decodes_numeric_user_id() -> Result<()> {
        let response: AuthResponse = serde_json::from_value(json!({
            "token": "header.payload.signature",
            "user": { "id": 12, "name": "Ada", "email": "ada@example.com" }
        }))?;

        assert_eq!(response.token, "header.payload.signature");
        assert_eq!(response.user.id, "12");
        Ok(())
    }

    #[test]
    fn register_request_uses_plain_field_names() -> Result<()> {
        let request = RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request)?,
            json!({ "name": "Ada", "email": "ada@example.com", "password": "secret" })
        );
        Ok(())
    }
}
