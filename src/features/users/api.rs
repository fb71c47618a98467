//! The `/users` endpoints as a trait, so flows can run against the browser
//! client or an in-memory fake in tests. Every call carries the caller's
//! bearer token; authorization is enforced by the backend.

use crate::{
    app_lib::AppError,
    features::users::types::{ChangePasswordRequest, UserPatch, UserRecord},
};
use url::Url;

/// `/users/{id}` with `id` percent-encoded as a single path segment.
pub fn user_path(id: &str) -> String {
    let id = id.trim();
    match Url::parse("http://localhost/users") {
        Ok(mut url) => {
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.push(id);
            }
            url.path().to_string()
        }
        Err(_) => format!("/users/{id}"),
    }
}

#[allow(async_fn_in_trait)]
pub trait UsersApi {
    /// `GET /users`
    async fn list_users(&self) -> Result<Vec<UserRecord>, AppError>;

    /// `GET /users/me`
    async fn fetch_current_user(&self) -> Result<UserRecord, AppError>;

    /// `PATCH /users/me`
    async fn update_current_user(&self, patch: &UserPatch) -> Result<UserRecord, AppError>;

    /// `PATCH /users/{id}`
    async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<UserRecord, AppError>;

    /// `DELETE /users/me`
    async fn delete_current_user(&self) -> Result<(), AppError>;

    /// `DELETE /users/{id}`
    async fn delete_user(&self, id: &str) -> Result<(), AppError>;

    /// `PATCH /users/me/password`
    async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), AppError>;
}

#[cfg(test)]
mod tests {
    use super::user_path;

    #[test]
    fn user_path_encodes_the_id_as_one_segment() {
        assert_eq!(user_path(" 64f1c2 "), "/users/64f1c2");
        assert_eq!(user_path("a b/c?d#e"), "/users/a%20b%2Fc%3Fd%23e");
    }
}
