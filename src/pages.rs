//! Server-rendered marketing pages.
//!
//! The document database and its CRUD services live behind out-of-scope
//! collaborators, so every page renders from the per-culture string bundle
//! alone. Each handler reads the culture the middleware resolved and picks
//! the matching bundle.

use axum::{extract::State, response::Html, Extension};

use crate::i18n::{strings, ActiveCulture};
use crate::server::AppState;

pub async fn home(
    State(state): State<AppState>,
    Extension(ActiveCulture(tag)): Extension<ActiveCulture>,
) -> Html<String> {
    render(&state, tag, "/", |s| (s.home_heading, s.home_blurb))
}

pub async fn categories(
    State(state): State<AppState>,
    Extension(ActiveCulture(tag)): Extension<ActiveCulture>,
) -> Html<String> {
    render(&state, tag, "/categories", |s| (s.categories_heading, s.categories_blurb))
}

pub async fn destinations(
    State(state): State<AppState>,
    Extension(ActiveCulture(tag)): Extension<ActiveCulture>,
) -> Html<String> {
    render(&state, tag, "/destinations", |s| {
        (s.destinations_heading, s.destinations_blurb)
    })
}

pub async fn features(
    State(state): State<AppState>,
    Extension(ActiveCulture(tag)): Extension<ActiveCulture>,
) -> Html<String> {
    render(&state, tag, "/features", |s| (s.features_heading, s.features_blurb))
}

pub async fn trip_plans(
    State(state): State<AppState>,
    Extension(ActiveCulture(tag)): Extension<ActiveCulture>,
) -> Html<String> {
    render(&state, tag, "/tripplans", |s| (s.trip_plans_heading, s.trip_plans_blurb))
}

pub async fn testimonials(
    State(state): State<AppState>,
    Extension(ActiveCulture(tag)): Extension<ActiveCulture>,
) -> Html<String> {
    render(&state, tag, "/testimonials", |s| {
        (s.testimonials_heading, s.testimonials_blurb)
    })
}

pub async fn reservations(
    State(state): State<AppState>,
    Extension(ActiveCulture(tag)): Extension<ActiveCulture>,
) -> Html<String> {
    render(&state, tag, "/reservations", |s| {
        (s.reservations_heading, s.reservations_blurb)
    })
}

/// Render one page in the active culture.
///
/// `path` is the page's own route, threaded into the language-switch links as
/// the return target so switching brings the visitor back to the same page.
fn render(
    state: &AppState,
    tag: &str,
    path: &str,
    pick: impl Fn(&'static strings::PageStrings) -> (&'static str, &'static str),
) -> Html<String> {
    let s = strings::for_tag(tag);
    let (heading, blurb) = pick(s);

    let nav = [
        ("/", s.nav_home),
        ("/categories", s.nav_categories),
        ("/destinations", s.nav_destinations),
        ("/features", s.nav_features),
        ("/tripplans", s.nav_trip_plans),
        ("/testimonials", s.nav_testimonials),
        ("/reservations", s.nav_reservations),
    ]
    .map(|(href, label)| format!("<a href=\"{href}\">{label}</a>"))
    .join(" | ");

    // Link-style entry shape; the POST form is what the full picker widget
    // would submit to.
    let languages = state
        .cultures
        .tags()
        .iter()
        .copied()
        .map(|lang| {
            if lang == tag {
                format!(
                    "<a href=\"/language/set?culture={lang}&returnUrl={path}\"><strong>{lang}</strong></a>"
                )
            } else {
                format!("<a href=\"/language/set?culture={lang}&returnUrl={path}\">{lang}</a>")
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"{tag}\">\n\
         <head><meta charset=\"utf-8\"><title>{title} — {heading}</title></head>\n\
         <body>\n\
         <header><h1>{title}</h1><nav>{nav}</nav>\n\
         <p>{language_label}: {languages}</p></header>\n\
         <main><h2>{heading}</h2><p>{blurb}</p></main>\n\
         </body>\n\
         </html>\n",
        title = s.site_title,
        language_label = s.language_label,
    ))
}
