//! Browser client for the `/auth` endpoints. Bad credentials come back as 400
//! or 401 and are reported as `Unauthorized` so the login form can say so.

use crate::{
    app_lib::{AppError, post_json_response},
    features::auth::{
        api::{AuthApi, credentials_error},
        types::{AuthResponse, LoginRequest, RegisterRequest},
    },
};

pub struct AuthClient;

impl AuthApi for AuthClient {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AppError> {
        post_json_response("/auth/login", request)
            .await
            .map_err(|err| credentials_error(err, "Invalid email or password."))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AppError> {
        post_json_response("/auth/register", request)
            .await
            .map_err(|err| credentials_error(err, "Registration was rejected."))
    }
}
