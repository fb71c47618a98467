//! Wire types for the `/users` endpoints.
//!
//! The API identifies users by `_id` while the auth endpoints send `id` (a
//! number). Both decode into a single string `id`, and both are written back on
//! encode so cached copies stay readable either way.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireUser", into = "WireUser")]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub role: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl UserRecord {
    /// Overlays a fresher copy of the same user. Fields the newer copy leaves
    /// blank or absent keep their current values.
    pub fn merged_with(&self, newer: &UserRecord) -> UserRecord {
        fn text(newer: &str, current: &str) -> String {
            if newer.trim().is_empty() { current } else { newer }.to_string()
        }

        UserRecord {
            id: text(&newer.id, &self.id),
            name: text(&newer.name, &self.name),
            email: text(&newer.email, &self.email),
            avatar_url: newer.avatar_url.clone().or_else(|| self.avatar_url.clone()),
            role: newer.role.clone().or_else(|| self.role.clone()),
            created_at: newer.created_at.clone().or_else(|| self.created_at.clone()),
            updated_at: newer.updated_at.clone().or_else(|| self.updated_at.clone()),
        }
    }

    /// Name for banners and dialogs, falling back to the email.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(i64),
}

impl WireId {
    fn into_string(self) -> String {
        match self {
            WireId::Text(value) => value.trim().to_string(),
            WireId::Number(value) => value.to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireUser {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    object_id: Option<WireId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<WireId>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<String>,
}

impl TryFrom<WireUser> for UserRecord {
    type Error = String;

    fn try_from(wire: WireUser) -> Result<Self, Self::Error> {
        let id = wire
            .object_id
            .map(WireId::into_string)
            .filter(|value| !value.is_empty())
            .or_else(|| {
                wire.id
                    .map(WireId::into_string)
                    .filter(|value| !value.is_empty())
            })
            .ok_or_else(|| "user record is missing an id".to_string())?;

        Ok(UserRecord {
            id,
            name: wire.name,
            email: wire.email,
            avatar_url: non_blank(wire.avatar_url),
            role: non_blank(wire.role),
            created_at: wire.created_at,
            updated_at: wire.updated_at,
        })
    }
}

impl From<UserRecord> for WireUser {
    fn from(user: UserRecord) -> Self {
        WireUser {
            object_id: Some(WireId::Text(user.id.clone())),
            id: Some(WireId::Text(user.id)),
            name: user.name,
            email: user.email,
            avatar_url: user.avatar_url,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|inner| !inner.trim().is_empty())
}

/// Body of `GET /users`; older deployments return a bare array.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum UsersResponse {
    Wrapped { users: Vec<UserRecord> },
    Bare(Vec<UserRecord>),
}

impl UsersResponse {
    pub fn into_users(self) -> Vec<UserRecord> {
        match self {
            UsersResponse::Wrapped { users } | UsersResponse::Bare(users) => users,
        }
    }
}

/// Body of `GET /users/me` and the `PATCH` endpoints: either the user itself or
/// `{ "user": ... }`.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum UserEnvelope {
    Wrapped { user: UserRecord },
    Bare(UserRecord),
}

impl UserEnvelope {
    pub fn into_user(self) -> UserRecord {
        match self {
            UserEnvelope::Wrapped { user } | UserEnvelope::Bare(user) => user,
        }
    }
}

/// Partial update for `PATCH /users/me` and `PATCH /users/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}
