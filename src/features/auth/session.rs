//! The tab-scoped session: bearer token plus a cached copy of the signed-in
//! user's profile.

use crate::{
    app_lib::{AppError, http::bearer_headers},
    features::{
        auth::{
            api::AuthApi,
            storage::{SessionStore, TOKEN_KEY, USER_KEY},
            types::{AuthResponse, LoginRequest, RegisterRequest, Session},
        },
        users::types::UserRecord,
    },
};
use tracing::{info, warn};

pub struct AuthSession<S> {
    store: S,
}

impl<S: SessionStore> AuthSession<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Signs in and persists the returned token and profile.
    pub async fn login<A: AuthApi>(
        &self,
        api: &A,
        email: &str,
        password: &str,
    ) -> Result<Session, AppError> {
        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() {
            return Err(AppError::Validation(
                "Email and password are required.".to_string(),
            ));
        }

        let response = api
            .login(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;
        self.establish(response)
    }

    /// Creates an account and signs in with it.
    pub async fn register<A: AuthApi>(
        &self,
        api: &A,
        request: RegisterRequest,
    ) -> Result<Session, AppError> {
        let response = api.register(&request).await?;
        self.establish(response)
    }

    fn establish(&self, response: AuthResponse) -> Result<Session, AppError> {
        let user_json = serde_json::to_string(&response.user)
            .map_err(|err| AppError::Serialization(format!("Failed to cache profile: {err}")))?;
        self.store.set(TOKEN_KEY, &response.token)?;
        self.store.set(USER_KEY, &user_json)?;
        info!(user_id = %response.user.id, "session established");

        Ok(Session {
            token: response.token,
            cached_user: Some(response.user),
        })
    }

    /// Forgets the token and cached profile.
    pub fn logout(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
        info!("session cleared");
    }

    pub fn token(&self) -> Option<String> {
        self.store
            .get(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Cached profile of the signed-in user. Unreadable JSON reads as `None`.
    pub fn current_user(&self) -> Option<UserRecord> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!("ignoring unreadable cached profile: {err}");
                None
            }
        }
    }

    /// The stored session, if a token is present.
    pub fn snapshot(&self) -> Option<Session> {
        self.token().map(|token| Session {
            token,
            cached_user: self.current_user(),
        })
    }

    pub fn auth_headers(&self) -> Vec<(String, String)> {
        bearer_headers(self.token().as_deref())
    }

    /// Bearer headers for a protected call; without a token no request is made.
    pub fn require_auth_headers(&self) -> Result<Vec<(String, String)>, AppError> {
        if self.is_authenticated() {
            Ok(self.auth_headers())
        } else {
            Err(AppError::Unauthorized("Please sign in to continue.".to_string()))
        }
    }

    /// Folds an updated copy of the signed-in user into the cache and returns
    /// the merged profile.
    pub fn merge_cached_user(&self, updated: &UserRecord) -> Result<UserRecord, AppError> {
        let merged = match self.current_user() {
            Some(cached) => cached.merged_with(updated),
            None => updated.clone(),
        };
        let user_json = serde_json::to_string(&merged)
            .map_err(|err| AppError::Serialization(format!("Failed to cache profile: {err}")))?;
        self.store.set(USER_KEY, &user_json)?;
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{
        auth::{storage::memory::MemorySessionStore, types::RegisterRequest},
        users::directory::tests::user,
    };
    use anyhow::Result;
    use std::cell::Cell;

    struct FakeAuthApi {
        password: &'static str,
        calls: Cell<usize>,
    }

    impl FakeAuthApi {
        fn new(password: &'static str) -> Self {
            Self {
                password,
                calls: Cell::new(0),
            }
        }
    }

    impl AuthApi for FakeAuthApi {
        async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AppError> {
            self.calls.set(self.calls.get() + 1);
            if request.password == self.password {
                Ok(AuthResponse {
                    token: "token-123".to_string(),
                    user: user("1", "Ada"),
                })
            } else {
                Err(AppError::Unauthorized("Invalid email or password.".to_string()))
            }
        }

        async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AppError> {
            self.calls.set(self.calls.get() + 1);
            Ok(AuthResponse {
                token: "token-new".to_string(),
                user: user("2", &request.name),
            })
        }
    }

    #[tokio::test]
    async fn login_persists_token_and_logout_clears_it() -> Result<()> {
        let store = MemorySessionStore::default();
        let session = AuthSession::new(store.clone());
        let api = FakeAuthApi::new("correct horse");

        let established = session.login(&api, "ada@example.com", "correct horse").await?;
        assert_eq!(established.token, "token-123");
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("token-123"));
        assert!(session.is_authenticated());
        assert_eq!(session.current_user().map(|u| u.id), Some("1".to_string()));
        assert_eq!(
            session.auth_headers(),
            vec![("Authorization".to_string(), "Bearer token-123".to_string())]
        );

        session.logout();
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(USER_KEY), None);
        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
        assert!(session.auth_headers().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn bad_credentials_leave_storage_untouched() {
        let store = MemorySessionStore::default();
        let session = AuthSession::new(store.clone());
        let api = FakeAuthApi::new("correct horse");

        let result = session.login(&api, "ada@example.com", "wrong").await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(session.snapshot().is_none());
    }

    #[tokio::test]
    async fn blank_credentials_skip_the_request() {
        let session = AuthSession::new(MemorySessionStore::default());
        let api = FakeAuthApi::new("pw");

        let result = session.login(&api, "  ", "pw").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(api.calls.get(), 0);
    }

    #[tokio::test]
    async fn register_establishes_a_session() -> Result<()> {
        let session = AuthSession::new(MemorySessionStore::default());
        let api = FakeAuthApi::new("pw");

        let established = session
            .register(
                &api,
                RegisterRequest {
                    name: "Grace".to_string(),
                    email: "grace@example.com".to_string(),
                    password: "pw".to_string(),
                },
            )
            .await?;

        assert_eq!(established.cached_user.map(|u| u.name), Some("Grace".to_string()));
        assert_eq!(session.token().as_deref(), Some("token-new"));
        Ok(())
    }

    #[test]
    fn corrupt_cached_profile_reads_as_none() -> Result<()> {
        let store = MemorySessionStore::default();
        store.set(TOKEN_KEY, "t")?;
        store.set(USER_KEY, "{not json")?;
        let session = AuthSession::new(store);

        assert!(session.current_user().is_none());
        assert_eq!(
            session.snapshot(),
            Some(Session {
                token: "t".to_string(),
                cached_user: None
            })
        );
        Ok(())
    }

    #[test]
    fn merge_cached_user_overlays_updates() -> Result<()> {
        let store = MemorySessionStore::default();
        let session = AuthSession::new(store);
        let mut cached = user("1", "Ada");
        cached.role = Some("admin".to_string());
        session.merge_cached_user(&cached)?;

        let renamed = user("1", "Ada Lovelace");
        let merged = session.merge_cached_user(&renamed)?;

        assert_eq!(merged.name, "Ada Lovelace");
        assert_eq!(merged.role.as_deref(), Some("admin"));
        assert_eq!(session.current_user(), Some(merged));
        Ok(())
    }

    #[test]
    fn protected_calls_need_a_token() -> Result<()> {
        let store = MemorySessionStore::default();
        let session = AuthSession::new(store.clone());
        assert!(matches!(
            session.require_auth_headers(),
            Err(AppError::Unauthorized(_))
        ));

        store.set(TOKEN_KEY, "token-9")?;
        assert_eq!(
            session.require_auth_headers()?,
            vec![("Authorization".to_string(), "Bearer token-9".to_string())]
        );
        Ok(())
    }
}
