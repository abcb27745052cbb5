//! URL helpers for frontend-backend communication
//!
//! Pages and action endpoints are served by the same origin, so the base URL
//! is usually empty and paths stay relative.

use contracts::system::routes::SUBJECT_PLACEHOLDER;

/// Build a full URL from the configured base and a path
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// assert_eq!(api_url("", "/activate_user/alice"), "/activate_user/alice");
/// assert_eq!(api_url("http://localhost:5000/", "/logout"), "http://localhost:5000/logout");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Substitute the subject into a path template, percent-encoding it as a
/// single path segment
pub fn render_path(template: &str, subject: &str) -> String {
    template.replace(SUBJECT_PLACEHOLDER, &urlencoding::encode(subject))
}

/// Substitute the subject verbatim into a user-facing text template
pub fn render_text(template: &str, subject: &str) -> String {
    template.replace(SUBJECT_PLACEHOLDER, subject)
}
