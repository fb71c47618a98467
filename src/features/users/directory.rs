//! Client-side user lookup. The API has no single-user endpoint, so resolving an
//! id means fetching the whole list and scanning it.

use crate::{
    app_lib::AppError,
    features::users::{api::UsersApi, types::UserRecord},
};
use tracing::debug;

pub struct UserDirectory<'a, A> {
    api: &'a A,
}

impl<'a, A: UsersApi> UserDirectory<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Fetches every user in one request.
    pub async fn list_all(&self) -> Result<Vec<UserRecord>, AppError> {
        let users = self.api.list_users().await?;
        debug!(count = users.len(), "fetched user list");
        Ok(users)
    }

    /// Resolves one user by id from a fresh list.
    pub async fn find_by_id(&self, id: &str) -> Result<UserRecord, AppError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(AppError::Validation("User id is required.".to_string()));
        }

        let users = self.list_all().await?;
        find_in(users, id)
    }
}

/// Picks the user with `id` out of an already fetched list.
pub fn find_in(users: Vec<UserRecord>, id: &str) -> Result<UserRecord, AppError> {
    users
        .into_iter()
        .find(|user| user.id == id)
        .ok_or_else(|| AppError::NotFound("User not found.".to_string()))
}

/// Banner shown after the list loads.
pub fn loaded_message(count: usize) -> String {
    let noun = if count == 1 { "user" } else { "users" };
    format!("Successfully loaded {count} {noun}")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::features::users::types::{ChangePasswordRequest, UserPatch};
    use std::cell::{Cell, RefCell};

    pub(crate) fn user(id: &str, name: &str) -> UserRecord {
        UserRecord {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            avatar_url: None,
            role: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// In-memory `UsersApi` that records which endpoints were hit.
    #[derive(Default)]
    pub(crate) struct FakeUsersApi {
        pub users: RefCell<Vec<UserRecord>>,
        pub me: Option<UserRecord>,
        pub fail_list: bool,
        pub fail_writes: Option<AppError>,
        pub calls: RefCell<Vec<String>>,
        pub list_calls: Cell<usize>,
    }

    impl FakeUsersApi {
        pub(crate) fn with_users(users: Vec<UserRecord>) -> Self {
            Self {
                users: RefCell::new(users),
                ..Self::default()
            }
        }

        fn record(&self, call: String) {
            self.calls.borrow_mut().push(call);
        }

        fn write_result(&self) -> Result<(), AppError> {
            match &self.fail_writes {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        fn apply(&self, id: &str, patch: &UserPatch) -> Result<UserRecord, AppError> {
            let mut users = self.users.borrow_mut();
            let target = users
                .iter_mut()
                .find(|user| user.id == id)
                .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;
            if let Some(name) = &patch.name {
                target.name = name.clone();
            }
            if patch.avatar_url.is_some() {
                target.avatar_url = patch.avatar_url.clone();
            }
            Ok(target.clone())
        }
    }

    impl UsersApi for FakeUsersApi {
        async fn list_users(&self) -> Result<Vec<UserRecord>, AppError> {
            self.record("GET /users".to_string());
            self.list_calls.set(self.list_calls.get() + 1);
            if self.fail_list {
                return Err(AppError::Network("offline".to_string()));
            }
            Ok(self.users.borrow().clone())
        }

        async fn fetch_current_user(&self) -> Result<UserRecord, AppError> {
            self.record("GET /users/me".to_string());
            self.me.clone().ok_or(AppError::Http {
                status: 500,
                message: String::new(),
            })
        }

        async fn update_current_user(&self, patch: &UserPatch) -> Result<UserRecord, AppError> {
            self.record("PATCH /users/me".to_string());
            self.write_result()?;
            let id = self.me.as_ref().map(|me| me.id.clone()).unwrap_or_default();
            self.apply(&id, patch)
        }

        async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<UserRecord, AppError> {
            self.record(format!("PATCH /users/{id}"));
            self.write_result()?;
            self.apply(id, patch)
        }

        async fn delete_current_user(&self) -> Result<(), AppError> {
            self.record("DELETE /users/me".to_string());
            self.write_result()
        }

        async fn delete_user(&self, id: &str) -> Result<(), AppError> {
            self.record(format!("DELETE /users/{id}"));
            self.write_result()?;
            self.users.borrow_mut().retain(|user| user.id != id);
            Ok(())
        }

        async fn change_password(&self, _request: &ChangePasswordRequest) -> Result<(), AppError> {
            self.record("PATCH /users/me/password".to_string());
            self.write_result()
        }
    }

    #[tokio::test]
    async fn find_by_id_returns_matching_user() -> anyhow::Result<()> {
        let api = FakeUsersApi::with_users(vec![user("1", "Ada"), user("2", "Grace")]);
        let directory = UserDirectory::new(&api);

        let found = directory.find_by_id(" 2 ").await?;
        assert_eq!(found.name, "Grace");
        assert_eq!(api.list_calls.get(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn find_by_id_reports_not_found() {
        let api = FakeUsersApi::with_users(vec![user("1", "Ada")]);
        let directory = UserDirectory::new(&api);

        let result = directory.find_by_id("missing").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn blank_id_fails_before_fetching() {
        let api = FakeUsersApi::with_users(vec![user("1", "Ada")]);
        let directory = UserDirectory::new(&api);

        let result = directory.find_by_id("   ").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(api.list_calls.get(), 0);
    }

    #[tokio::test]
    async fn list_errors_propagate() {
        let api = FakeUsersApi {
            fail_list: true,
            ..FakeUsersApi::default()
        };
        let directory = UserDirectory::new(&api);

        assert!(matches!(
            directory.list_all().await,
            Err(AppError::Network(_))
        ));
    }

    #[test]
    fn find_in_scans_fetched_list() {
        let users = vec![user("a", "One"), user("b", "Two")];
        assert_eq!(find_in(users.clone(), "a").map(|u| u.name).ok(), Some("One".to_string()));
        assert!(find_in(users, "c").is_err());
    }

    #[test]
    fn loaded_message_pluralizes() {
        assert_eq!(loaded_message(1), "Successfully loaded 1 user");
        assert_eq!(loaded_message(0), "Successfully loaded 0 users");
        assert_eq!(loaded_message(12), "Successfully loaded 12 users");
    }
}
