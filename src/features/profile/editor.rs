//! Load/save/delete flow for one user record.
//!
//! Flow Overview:
//! 1) Decide whether the viewed id is the signed-in user's own profile.
//! 2) Own profile: try `GET /users/me`, fall back to the directory lookup.
//!    Anyone else: directory lookup (there is no single-user endpoint).
//! 3) Save validates locally, then patches `/users/me` or `/users/{id}`.
//! 4) Delete refuses the signed-in user before any request is made.

use crate::{
    app_lib::AppError,
    features::{
        profile::form::ProfileForm,
        users::{
            api::UsersApi, deletion::ensure_not_self, directory::UserDirectory, types::UserRecord,
        },
    },
};
use tracing::{info, warn};

pub struct ProfileEditor<'a, A> {
    api: &'a A,
    user_id: String,
    viewer: Option<UserRecord>,
}

impl<'a, A: UsersApi> ProfileEditor<'a, A> {
    pub fn new(api: &'a A, user_id: &str, viewer: Option<UserRecord>) -> Self {
        Self {
            api,
            user_id: user_id.trim().to_string(),
            viewer,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn is_own_profile(&self) -> bool {
        self.viewer
            .as_ref()
            .is_some_and(|viewer| !viewer.id.is_empty() && viewer.id == self.user_id)
    }

    pub async fn load(&self) -> Result<UserRecord, AppError> {
        if self.user_id.is_empty() {
            return Err(AppError::Validation("User id is required.".to_string()));
        }

        if self.is_own_profile() {
            match self.api.fetch_current_user().await {
                Ok(user) => return Ok(user),
                Err(err) => warn!("current-user lookup failed, falling back to list: {err}"),
            }
        }

        UserDirectory::new(self.api).find_by_id(&self.user_id).await
    }

    /// Validates the form and submits the partial update.
    pub async fn save(&self, form: &ProfileForm) -> Result<UserRecord, AppError> {
        let patch = form.validate()?;

        let updated = if self.is_own_profile() {
            self.api.update_current_user(&patch).await?
        } else {
            self.api.update_user(&self.user_id, &patch).await?
        };
        info!(user_id = %self.user_id, "profile updated");
        Ok(updated)
    }

    /// Fails for the signed-in user; callers check this before confirming.
    pub fn ensure_deletable(&self) -> Result<(), AppError> {
        ensure_not_self(self.viewer.as_ref(), &self.user_id)
    }

    /// Deletes the viewed user after the confirmation dialog.
    pub async fn delete(&self) -> Result<(), AppError> {
        self.ensure_deletable()?;
        self.api.delete_user(&self.user_id).await?;
        info!(user_id = %self.user_id, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::users::directory::tests::{FakeUsersApi, user};
    use anyhow::Result;

    fn valid_form(name: &str) -> ProfileForm {
        ProfileForm {
            name: name.to_string(),
            email: "someone@example.com".to_string(),
            avatar_url: String::new(),
        }
    }

    #[tokio::test]
    async fn own_profile_loads_from_me_endpoint() -> Result<()> {
        let me = user("1", "Ada");
        let api = FakeUsersApi {
            me: Some(me.clone()),
            ..FakeUsersApi::with_users(vec![me.clone()])
        };
        let editor = ProfileEditor::new(&api, "1", Some(me));

        assert!(editor.is_own_profile());
        assert_eq!(editor.load().await?.name, "Ada");
        assert_eq!(api.calls.borrow().as_slice(), ["GET /users/me"]);
        Ok(())
    }

    #[tokio::test]
    async fn own_profile_falls_back_to_list() -> Result<()> {
        let me = user("1", "Ada");
        let api = FakeUsersApi::with_users(vec![me.clone(), user("2", "Grace")]);
        let editor = ProfileEditor::new(&api, "1", Some(me));

        assert_eq!(editor.load().await?.id, "1");
        assert_eq!(
            api.calls.borrow().as_slice(),
            ["GET /users/me", "GET /users"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn other_profile_uses_directory_and_reports_missing() {
        let api = FakeUsersApi::with_users(vec![user("2", "Grace")]);
        let editor = ProfileEditor::new(&api, "9", Some(user("1", "Ada")));

        assert!(!editor.is_own_profile());
        assert!(matches!(editor.load().await, Err(AppError::NotFound(_))));
        assert_eq!(api.calls.borrow().as_slice(), ["GET /users"]);
    }

    #[tokio::test]
    async fn invalid_email_never_reaches_the_api() {
        let api = FakeUsersApi::with_users(vec![user("2", "Grace")]);
        let editor = ProfileEditor::new(&api, "2", None);
        let form = ProfileForm {
            email: "grace.example.com".to_string(),
            ..valid_form("Grace")
        };

        assert!(matches!(editor.save(&form).await, Err(AppError::Validation(_))));
        assert!(api.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn save_targets_me_or_id_endpoint() -> Result<()> {
        let me = user("1", "Ada");
        let api = FakeUsersApi {
            me: Some(me.clone()),
            ..FakeUsersApi::with_users(vec![me.clone(), user("2", "Grace")])
        };

        let own = ProfileEditor::new(&api, "1", Some(me.clone()));
        assert_eq!(own.save(&valid_form("Ada L.")).await?.name, "Ada L.");

        let other = ProfileEditor::new(&api, "2", Some(me));
        assert_eq!(other.save(&valid_form("Grace H.")).await?.name, "Grace H.");

        assert_eq!(
            api.calls.borrow().as_slice(),
            ["PATCH /users/me", "PATCH /users/2"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn server_errors_surface_from_save() {
        let api = FakeUsersApi {
            fail_writes: Some(AppError::Http {
                status: 500,
                message: String::new(),
            }),
            ..FakeUsersApi::with_users(vec![user("2", "Grace")])
        };
        let editor = ProfileEditor::new(&api, "2", None);

        assert!(matches!(
            editor.save(&valid_form("Grace")).await,
            Err(AppError::Http { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn self_delete_is_rejected_before_any_request() {
        let me = user("1", "Ada");
        let api = FakeUsersApi::with_users(vec![me.clone()]);
        let editor = ProfileEditor::new(&api, "1", Some(me));

        assert!(matches!(editor.delete().await, Err(AppError::Forbidden(_))));
        assert!(api.calls.borrow().is_empty());
        assert_eq!(api.users.borrow().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_other_user() -> Result<()> {
        let api = FakeUsersApi::with_users(vec![user("1", "Ada"), user("2", "Grace")]);
        let editor = ProfileEditor::new(&api, "2", Some(user("1", "Ada")));

        editor.delete().await?;
        assert_eq!(api.calls.borrow().as_slice(), ["DELETE /users/2"]);
        assert_eq!(api.users.borrow().len(), 1);
        Ok(())
    }
}
