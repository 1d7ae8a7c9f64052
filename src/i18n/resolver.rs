//! Per-request culture resolution.
//!
//! Each request gets exactly one active culture, resolved in priority order:
//!
//! 1. explicit `culture` query parameter, if supported
//! 2. the language preference cookie, if present and supported
//! 3. the process default
//!
//! Resolution is read-only and total: it never fails and never produces a tag
//! outside the supported set. Unknown cookie values are treated as absent.

use axum::{
    extract::{Query, Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::i18n::CultureSet;
use crate::language;
use crate::server::AppState;

/// The culture tag resolved for the current request.
///
/// Inserted into request extensions by [`culture_middleware`]; page handlers
/// pull it out with `Extension<ActiveCulture>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveCulture(pub &'static str);

#[derive(Debug, Deserialize)]
pub struct CultureQuery {
    culture: Option<String>,
}

/// Pick the active culture for one request.
///
/// `override_tag` is the per-request override (query parameter), `cookie_tag`
/// the persisted preference. Either may be absent or garbage; the result is
/// always a member of `cultures`.
pub fn resolve_culture(
    cultures: &CultureSet,
    override_tag: Option<&str>,
    cookie_tag: Option<&str>,
) -> &'static str {
    if let Some(tag) = override_tag {
        if cultures.is_supported(tag) {
            return cultures.validate_or_default(tag);
        }
    }
    if let Some(tag) = cookie_tag {
        if cultures.is_supported(tag) {
            return cultures.validate_or_default(tag);
        }
    }
    cultures.default_tag()
}

/// Middleware that resolves the active culture and stores it in request
/// extensions before the handler runs.
pub async fn culture_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    query: Option<Query<CultureQuery>>,
    mut request: Request,
    next: Next,
) -> Response {
    let override_tag = query.as_ref().and_then(|q| q.culture.as_deref());
    let cookie_tag = language::preference_tag(&jar);

    let active = resolve_culture(&state.cultures, override_tag, cookie_tag);
    request.extensions_mut().insert(ActiveCulture(active));

    next.run(request).await
}
