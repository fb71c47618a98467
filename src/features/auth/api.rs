use crate::{
    app_lib::AppError,
    features::auth::types::{AuthResponse, LoginRequest, RegisterRequest},
};

/// The unauthenticated `/auth` endpoints.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AppError>;

    /// `POST /auth/register`
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AppError>;
}

/// Re-labels a 400/401 from the auth endpoints as `Unauthorized`, keeping the
/// server's message when it sent one.
pub fn credentials_error(err: AppError, fallback: &str) -> AppError {
    match err {
        AppError::Http { status, message } if status == 400 || status == 401 => {
            AppError::Unauthorized(if message.is_empty() {
                fallback.to_string()
            } else {
                message
            })
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_credentials_become_unauthorized() {
        let silent = AppError::Http {
            status: 401,
            message: String::new(),
        };
        let explained = AppError::Http {
            status: 400,
            message: "Email already registered".to_string(),
        };

        assert_eq!(
            credentials_error(silent, "Invalid email or password."),
            AppError::Unauthorized("Invalid email or password.".to_string())
        );
        assert_eq!(
            credentials_error(explained, "Registration was rejected."),
            AppError::Unauthorized("Email already registered".to_string())
        );
    }

    #[test]
    fn other_failures_pass_through() {
        let server = AppError::Http {
            status: 503,
            message: String::new(),
        };
        assert_eq!(credentials_error(server.clone(), "x"), server);

        let network = AppError::Network("offline".to_string());
        assert_eq!(credentials_error(network.clone(), "x"), network);
    }
}
