//! Router assembly and the listening loop.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::i18n::{self, CultureSet};
use crate::{language, pages};

/// Shared application state: the culture contract, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub cultures: Arc<CultureSet>,
}

/// Build the full router.
///
/// The culture middleware wraps every route, so even the language endpoints
/// see a resolved culture; page handlers read it from request extensions.
pub fn build_router(cultures: Arc<CultureSet>) -> Router {
    let state = AppState { cultures };

    Router::new()
        .route("/", get(pages::home))
        .route("/categories", get(pages::categories))
        .route("/destinations", get(pages::destinations))
        .route("/features", get(pages::features))
        .route("/tripplans", get(pages::trip_plans))
        .route("/testimonials", get(pages::testimonials))
        .route("/reservations", get(pages::reservations))
        .route("/language/change", post(language::change_language))
        .route("/language/set", get(language::set_language))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            i18n::culture_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the listener and serve until shutdown.
pub async fn serve(config: &Config) -> Result<()> {
    let cultures = Arc::new(CultureSet::default());
    info!(
        "Supported cultures: {:?} (default: {})",
        cultures.tags(),
        cultures.default_tag()
    );

    let app = build_router(cultures);

    let addr = format!("{}:{}", config.bind_address, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on {addr}");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
