//! Transport-independent pieces of the HTTP helpers: URL joining, bearer
//! headers, and turning error responses into `AppError` values. Kept apart
//! from the `gloo-net` glue so the mapping rules can be tested natively.

use super::errors::AppError;
use serde_json::Value;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Returns the `Authorization` header pair for a bearer token, if any.
pub fn bearer_headers(token: Option<&str>) -> Vec<(String, String)> {
    token
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| vec![("Authorization".to_string(), format!("Bearer {value}"))])
        .unwrap_or_default()
}

/// Maps a non-success response into an `AppError`.
///
/// 403 and 404 get typed variants so call sites can branch on them; any other
/// status keeps the server's `message` (when the body is JSON and has one).
pub fn error_from_response(status: u16, body: &str) -> AppError {
    let message = server_message(body);
    match status {
        403 => AppError::Forbidden(
            message.unwrap_or_else(|| "You are not allowed to perform this action.".to_string()),
        ),
        404 => AppError::NotFound(message.unwrap_or_else(|| "Resource not found.".to_string())),
        _ => AppError::Http {
            status,
            message: message.unwrap_or_default(),
        },
    }
}

/// Extracts a `message` (or `error`) string from a JSON error body, sanitized
/// for display.
pub fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body.trim()).ok()?;
    let message = value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(Value::as_str)?;
    sanitize_body(message)
}

/// Trims and truncates text for user-facing messages; `None` when blank.
pub fn sanitize_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_ERROR_CHARS).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url_with_base("https://api.example.com/api/", "/users"),
            "https://api.example.com/api/users"
        );
        assert_eq!(build_url_with_base("/api", "users/me"), "/api/users/me");
        assert_eq!(build_url_with_base("  ", "/users"), "/users");
    }

    #[test]
    fn bearer_headers_skip_missing_or_blank_tokens() {
        assert!(bearer_headers(None).is_empty());
        assert!(bearer_headers(Some("  ")).is_empty());
        assert_eq!(
            bearer_headers(Some("abc.def")),
            vec![("Authorization".to_string(), "Bearer abc.def".to_string())]
        );
    }

    #[test]
    fn forbidden_and_not_found_get_typed_variants() {
        assert!(matches!(
            error_from_response(403, r#"{"message":"Admins only"}"#),
            AppError::Forbidden(message) if message == "Admins only"
        ));
        assert!(matches!(error_from_response(403, ""), AppError::Forbidden(_)));
        assert!(matches!(error_from_response(404, "<html>"), AppError::NotFound(_)));
    }

    #[test]
    fn other_statuses_keep_json_message_only() {
        assert_eq!(
            error_from_response(400, r#"{"message":"  Name is required  "}"#),
            AppError::Http {
                status: 400,
                message: "Name is required".to_string()
            }
        );
        assert_eq!(
            error_from_response(500, "<html>Internal Server Error</html>"),
            AppError::Http {
                status: 500,
                message: String::new()
            }
        );
    }

    #[test]
    fn sanitize_body_truncates_long_messages() {
        let long = "x".repeat(500);
        let sanitized = sanitize_body(&long).unwrap_or_default();
        assert_eq!(sanitized.chars().count(), MAX_ERROR_CHARS);
        assert_eq!(sanitize_body("   "), None);
    }

    #[test]
    fn server_message_reads_error_field() {
        assert_eq!(
            server_message(r#"{"error":"Invalid credentials"}"#),
            Some("Invalid credentials".to_string())
        );
        assert_eq!(server_message(r#"{"message": 42}"#), None);
        assert_eq!(server_message("plain text"), None);
    }
}
