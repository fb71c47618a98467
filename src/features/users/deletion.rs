//! Delete guard and confirmation copy shared by the users list and the detail
//! view. The self-delete check is a UX rule only; the backend decides.

use crate::{app_lib::AppError, features::users::types::UserRecord};

/// Shown by the detail view when the viewer opens their own profile.
pub const SELF_DELETE_MESSAGE: &str = "You cannot delete your own account.";
/// Shown by the list view when the viewer picks their own row.
pub const SELF_DELETE_LIST_MESSAGE: &str = "You cannot delete yourself!";

/// Fails with `Forbidden` when `target_id` is the signed-in user.
pub fn ensure_not_self(viewer: Option<&UserRecord>, target_id: &str) -> Result<(), AppError> {
    match viewer {
        Some(viewer) if !viewer.id.is_empty() && viewer.id == target_id.trim() => {
            Err(AppError::Forbidden(SELF_DELETE_MESSAGE.to_string()))
        }
        _ => Ok(()),
    }
}

/// Banner text after a delete request failed.
pub fn delete_failure_message(err: &AppError) -> String {
    if err.status() == Some(403) {
        "You are not allowed to delete this user.".to_string()
    } else {
        "Failed to delete user. Please try again.".to_string()
    }
}

/// Copy rendered by the confirmation modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub title: String,
    pub message: String,
    pub item_name: String,
    pub confirm_text: String,
    pub cancel_text: String,
}

impl Default for DeleteConfirmation {
    fn default() -> Self {
        Self {
            title: "Confirm Delete".to_string(),
            message: "Are you sure you want to delete this item?".to_string(),
            item_name: String::new(),
            confirm_text: "Delete".to_string(),
            cancel_text: "Cancel".to_string(),
        }
    }
}

impl DeleteConfirmation {
    /// Confirmation for deleting a user account.
    pub fn for_user(user: &UserRecord) -> Self {
        Self {
            title: "Delete User".to_string(),
            message: "Are you sure you want to delete this user? This action cannot be undone."
                .to_string(),
            item_name: user.display_name().to_string(),
            confirm_text: "Delete User".to_string(),
            ..Self::default()
        }
    }
}
