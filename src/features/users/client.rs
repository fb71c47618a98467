//! Browser client for the `/users` endpoints. Endpoint paths live here; the
//! bearer header comes from the current session.

use crate::{
    app_lib::{
        AppError, delete_with_headers, get_json_with_headers, patch_json_with_headers,
        patch_json_with_headers_response,
    },
    features::{
        auth::{session::AuthSession, storage::BrowserSessionStore},
        users::{
            api::{UsersApi, user_path},
            types::{ChangePasswordRequest, UserEnvelope, UserPatch, UserRecord, UsersResponse},
        },
    },
};

pub struct UsersClient {
    headers: Vec<(String, String)>,
}

impl UsersClient {
    /// Builds a client carrying the token currently stored for this tab, or
    /// fails with `Unauthorized` when the tab is signed out.
    pub fn from_session() -> Result<Self, AppError> {
        let headers = AuthSession::new(BrowserSessionStore).require_auth_headers()?;
        Ok(Self { headers })
    }
}

impl UsersApi for UsersClient {
    async fn list_users(&self) -> Result<Vec<UserRecord>, AppError> {
        let response: UsersResponse = get_json_with_headers("/users", &self.headers).await?;
        Ok(response.into_users())
    }

    async fn fetch_current_user(&self) -> Result<UserRecord, AppError> {
        let response: UserEnvelope = get_json_with_headers("/users/me", &self.headers).await?;
        Ok(response.into_user())
    }

    async fn update_current_user(&self, patch: &UserPatch) -> Result<UserRecord, AppError> {
        let response: UserEnvelope =
            patch_json_with_headers_response("/users/me", patch, &self.headers).await?;
        Ok(response.into_user())
    }

    async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<UserRecord, AppError> {
        let response: UserEnvelope =
            patch_json_with_headers_response(&user_path(id), patch, &self.headers).await?;
        Ok(response.into_user())
    }

    async fn delete_current_user(&self) -> Result<(), AppError> {
        delete_with_headers("/users/me", &self.headers).await
    }

    async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        delete_with_headers(&user_path(id), &self.headers).await
    }

    async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), AppError> {
        patch_json_with_headers("/users/me/password", request, &self.headers).await
    }
}
