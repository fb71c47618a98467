//! Change-password form validation for `PATCH /users/me/password`.

use crate::{app_lib::AppError, features::users::types::ChangePasswordRequest};

#[derive(Clone, Debug, Default)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChange {
    /// Checks the three fields and builds the request body.
    pub fn validate(&self) -> Result<ChangePasswordRequest, AppError> {
        if self.current_password.trim().is_empty()
            || self.new_password.trim().is_empty()
            || self.confirm_password.trim().is_empty()
        {
            return Err(AppError::Validation(
                "Current and new password fields are required.".to_string(),
            ));
        }

        if self.new_password != self.confirm_password {
            return Err(AppError::Validation(
                "New passwords do not match.".to_string(),
            ));
        }

        if self.new_password == self.current_password {
            return Err(AppError::Validation(
                "New password must differ from the current one.".to_string(),
            ));
        }

        Ok(ChangePasswordRequest {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}
