//! Language switch endpoint: validate the requested tag, persist it as a
//! cookie, redirect back.
//!
//! Two entry shapes are exposed — a POST form submission and a GET link — and
//! both funnel into [`switch_language`]. Invalid tags are silently normalized
//! to the default culture and unsafe redirect targets are replaced with `/`;
//! nothing here surfaces an error to the caller.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use time::Duration;
use tracing::info;

use crate::server::AppState;

/// Cookie holding the persisted language preference.
pub const LANGUAGE_COOKIE: &str = "JadooTravelLanguage";

/// Preference lifetime: one year. This is functional state the site needs on
/// every request, not tracking state, so it carries a long expiry.
const COOKIE_MAX_AGE: Duration = Duration::days(365);

/// Parameters shared by both entry shapes.
///
/// Both fields are attacker-controlled: the culture may be any string and the
/// return target may point anywhere.
#[derive(Debug, Deserialize)]
pub struct ChangeLanguage {
    culture: Option<String>,
    #[serde(rename = "returnUrl")]
    return_url: Option<String>,
}

/// `POST /language/change` — form submission from the language picker.
pub async fn change_language(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(params): Form<ChangeLanguage>,
) -> Response {
    switch_language(&state, jar, &params)
}

/// `GET /language/set` — link-style variant. Same validation, persistence and
/// redirect as the POST shape.
pub async fn set_language(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<ChangeLanguage>,
) -> Response {
    switch_language(&state, jar, &params)
}

/// Shared core: validate → persist → redirect.
fn switch_language(state: &AppState, jar: CookieJar, params: &ChangeLanguage) -> Response {
    let requested = params.culture.as_deref().unwrap_or("");
    let tag = state.cultures.validate_or_default(requested);
    if tag != requested {
        info!("Unsupported culture '{}' requested, persisting default '{}'", requested, tag);
    }

    let jar = jar.add(preference_cookie(tag));
    let target = sanitize_return_url(params.return_url.as_deref());

    (jar, (StatusCode::FOUND, [(header::LOCATION, target.to_owned())])).into_response()
}

/// Build the preference cookie for a validated tag.
pub fn preference_cookie(tag: &'static str) -> Cookie<'static> {
    Cookie::build((LANGUAGE_COOKIE, tag))
        .path("/")
        .max_age(COOKIE_MAX_AGE)
        .build()
}

/// Read the persisted preference from a request's cookie jar, if any.
///
/// The value is returned as-is; the resolver decides whether it is a
/// supported tag.
pub fn preference_tag(jar: &CookieJar) -> Option<&str> {
    jar.get(LANGUAGE_COOKIE).map(|cookie| cookie.value())
}

/// Reduce an untrusted return target to a safe local redirect path.
///
/// Absent or off-site targets become `/`. Accepted targets must start with a
/// single `/` (rejecting `//host` and `/\host` protocol-relative forms) and
/// contain no control characters.
pub fn sanitize_return_url(target: Option<&str>) -> &str {
    match target {
        Some(t) if is_local_path(t) => t,
        _ => "/",
    }
}

fn is_local_path(target: &str) -> bool {
    target.starts_with('/')
        && !target.starts_with("//")
        && !target.starts_with("/\\")
        && !target.chars().any(|c| c.is_ascii_control())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Redirect Guard Tests ====================

    #[test]
    fn test_sanitize_accepts_local_paths() {
        assert_eq!(sanitize_return_url(Some("/")), "/");
        assert_eq!(sanitize_return_url(Some("/destinations")), "/destinations");
        assert_eq!(sanitize_return_url(Some("/tripplans?page=2")), "/tripplans?page=2");
    }

    #[test]
    fn test_sanitize_absent_target_goes_home() {
        assert_eq!(sanitize_return_url(None), "/");
    }

    #[test]
    fn test_sanitize_rejects_absolute_urls() {
        assert_eq!(sanitize_return_url(Some("https://evil.example/phish")), "/");
        assert_eq!(sanitize_return_url(Some("http://evil.example")), "/");
        assert_eq!(sanitize_return_url(Some("javascript:alert(1)")), "/");
    }

    #[test]
    fn test_sanitize_rejects_protocol_relative_urls() {
        assert_eq!(sanitize_return_url(Some("//evil.example/phish")), "/");
        assert_eq!(sanitize_return_url(Some("/\\evil.example")), "/");
    }

    #[test]
    fn test_sanitize_rejects_control_characters() {
        assert_eq!(sanitize_return_url(Some("/x\r\nSet-Cookie: a=b")), "/");
    }

    #[test]
    fn test_sanitize_rejects_relative_and_empty() {
        assert_eq!(sanitize_return_url(Some("destinations")), "/");
        assert_eq!(sanitize_return_url(Some("")), "/");
    }

    // ==================== Cookie Tests ====================

    #[test]
    fn test_preference_cookie_attributes() {
        let cookie = preference_cookie("en");
        assert_eq!(cookie.name(), LANGUAGE_COOKIE);
        assert_eq!(cookie.value(), "en");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::days(365)));
    }

    #[test]
    fn test_preference_tag_roundtrip() {
        let jar = CookieJar::new().add(preference_cookie("de"));
        assert_eq!(preference_tag(&jar), Some("de"));
    }

    #[test]
    fn test_preference_tag_missing_cookie() {
        let jar = CookieJar::new();
        assert_eq!(preference_tag(&jar), None);
    }

    #[test]
    fn test_preference_cookie_overwrites_previous_value() {
        let jar = CookieJar::new()
            .add(preference_cookie("en"))
            .add(preference_cookie("fr"));
        assert_eq!(preference_tag(&jar), Some("fr"));
    }
}
