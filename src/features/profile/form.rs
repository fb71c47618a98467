//! Form model bound to the user detail view.
//!
//! Validation runs before any request is sent: the name is required and at
//! least two characters, the email must look like an address, and a blank
//! avatar URL is simply omitted from the patch. The email is shown read-only
//! and never sent.

use crate::{
    app_lib::AppError,
    features::users::types::{UserPatch, UserRecord},
};
use regex::Regex;
use url::Url;

/// Minimum trimmed length for a display name.
pub const MIN_NAME_LENGTH: usize = 2;

/// Hosts that serve images directly rather than through a redirect page.
const DIRECT_IMAGE_HOSTS: [&str; 4] = [
    "picsum.photos",
    "via.placeholder.com",
    "avatars.githubusercontent.com",
    "i.imgur.com",
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

/// Per-field messages for inline display under the inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

impl ProfileForm {
    pub fn from_record(user: &UserRecord) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            avatar_url: user.avatar_url.clone().unwrap_or_default(),
        }
    }

    pub fn field_errors(&self) -> FieldErrors {
        let name = self.name.trim();
        let email = self.email.trim();

        FieldErrors {
            name: if name.is_empty() {
                Some("Name is required.")
            } else if name.chars().count() < MIN_NAME_LENGTH {
                Some("Name must be at least 2 characters.")
            } else {
                None
            },
            email: if email.is_empty() {
                Some("Email is required.")
            } else if !valid_email(email) {
                Some("Please enter a valid email address.")
            } else {
                None
            },
        }
    }

    /// Builds the patch for a valid form, or the first validation failure.
    pub fn validate(&self) -> Result<UserPatch, AppError> {
        let errors = self.field_errors();
        if let Some(message) = errors.name.or(errors.email) {
            return Err(AppError::Validation(message.to_string()));
        }

        let avatar_url = self.avatar_url.trim();
        Ok(UserPatch {
            name: Some(self.name.trim().to_string()),
            avatar_url: (!avatar_url.is_empty()).then(|| avatar_url.to_string()),
        })
    }

    /// Avatar to preview: the typed URL when present, else the stored one.
    pub fn preview_avatar(&self, stored: Option<&str>) -> Option<String> {
        let typed = self.avatar_url.trim();
        if typed.is_empty() {
            stored
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        } else {
            Some(typed.to_string())
        }
    }
}

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// Whether `url` looks like something an `<img>` can render directly.
pub fn is_valid_image_url(url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return false;
    }
    if url.starts_with("data:image/") {
        return true;
    }

    let has_image_extension = Regex::new(r"(?i)\.(jpg|jpeg|png|gif|webp|svg|bmp|ico)(\?.*)?$")
        .is_ok_and(|re| re.is_match(url));
    if has_image_extension {
        return true;
    }

    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_lowercase))
        .is_some_and(|host| {
            DIRECT_IMAGE_HOSTS
                .iter()
                .any(|allowed| host == *allowed || host.ends_with(&format!(".{allowed}")))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::users::directory::tests::user;

    fn form(name: &str, email: &str, avatar: &str) -> ProfileForm {
        ProfileForm {
            name: name.to_string(),
            email: email.to_string(),
            avatar_url: avatar.to_string(),
        }
    }

    #[test]
    fn invalid_email_is_blocked() {
        let result = form("Ada", "ada-at-example", "").validate();
        assert_eq!(
            result,
            Err(AppError::Validation(
                "Please enter a valid email address.".to_string()
            ))
        );
        assert!(form("Ada", "", "").validate().is_err());
        assert!(form("Ada", "ada@example", "").validate().is_err());
    }

    #[test]
    fn name_is_required_and_at_least_two_chars() {
        assert_eq!(
            form("  ", "ada@example.com", "").field_errors().name,
            Some("Name is required.")
        );
        assert_eq!(
            form("A", "ada@example.com", "").field_errors().name,
            Some("Name must be at least 2 characters.")
        );
        assert!(form("Al", "al@example.com", "").field_errors().is_empty());
    }

    #[test]
    fn valid_form_builds_trimmed_patch() {
        let patch = form("  Ada Lovelace ", "ada@example.com", "  ").validate();
        assert_eq!(
            patch,
            Ok(UserPatch {
                name: Some("Ada Lovelace".to_string()),
                avatar_url: None,
            })
        );

        let with_avatar = form("Ada", "ada@example.com", " https://i.imgur.com/a.png ").validate();
        assert_eq!(
            with_avatar.ok().and_then(|patch| patch.avatar_url),
            Some("https://i.imgur.com/a.png".to_string())
        );
    }

    #[test]
    fn from_record_fills_every_field() {
        let mut record = user("1", "Ada");
        record.avatar_url = Some("https://picsum.photos/200".to_string());

        let form = ProfileForm::from_record(&record);
        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.avatar_url, "https://picsum.photos/200");
    }

    #[test]
    fn preview_prefers_typed_url() {
        let typed = form("Ada", "ada@example.com", "https://i.imgur.com/new.png");
        let blank = form("Ada", "ada@example.com", " ");

        assert_eq!(
            typed.preview_avatar(Some("https://i.imgur.com/old.png")).as_deref(),
            Some("https://i.imgur.com/new.png")
        );
        assert_eq!(
            blank.preview_avatar(Some("https://i.imgur.com/old.png")).as_deref(),
            Some("https://i.imgur.com/old.png")
        );
        assert_eq!(blank.preview_avatar(None), None);
    }

    #[test]
    fn image_urls_are_recognized() {
        assert!(is_valid_image_url("https://cdn.example.com/me.PNG"));
        assert!(is_valid_image_url("https://cdn.example.com/me.webp?size=64"));
        assert!(is_valid_image_url("https://picsum.photos/200/300"));
        assert!(is_valid_image_url("https://avatars.githubusercontent.com/u/1?v=4"));
        assert!(is_valid_image_url("data:image/png;base64,iVBORw0KGgo="));
        assert!(!is_valid_image_url("https://www.google.com/url?q=cat"));
        assert!(!is_valid_image_url(""));
        assert!(!is_valid_image_url("not a url"));
    }
}
