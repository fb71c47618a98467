//! Sign-up form validation for `POST /auth/register`. Name and email follow
//! the same rules as the profile editor.

use crate::{
    app_lib::AppError,
    features::{
        auth::types::RegisterRequest,
        profile::form::{MIN_NAME_LENGTH, valid_email},
    },
};

#[derive(Clone, Debug, Default)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Registration {
    pub fn validate(&self) -> Result<RegisterRequest, AppError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let fail = |message: &str| Err(AppError::Validation(message.to_string()));

        if name.is_empty() || email.is_empty() || self.password.trim().is_empty() {
            return fail("Name, email and password are required.");
        }
        if name.chars().count() < MIN_NAME_LENGTH {
            return fail("Name must be at least 2 characters.");
        }
        if !valid_email(email) {
            return fail("Please enter a valid email address.");
        }
        if self.password != self.confirm_password {
            return fail("Passwords do not match.");
        }

        Ok(RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}
