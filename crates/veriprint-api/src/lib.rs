//! # veriprint-api — HTTP Surface
//!
//! Two JSON endpoints binding the prover and verifier pipelines, plus
//! unauthenticated health probes:
//!
//! | Route               | Module             | Purpose                      |
//! |---------------------|--------------------|------------------------------|
//! | `POST /prove`       | [`routes::prove`]  | Witness assembly + Groth16 prove |
//! | `POST /verify`      | [`routes::verify`] | Server-side binding + verify |
//! | `GET /health/liveness`  | [`app`]        | Process liveness             |
//! | `GET /health/readiness` | [`app`]        | Keys generated, ready to serve |
//!
//! The proving context is immutable shared state created before the
//! listener opens; handlers hold no business logic beyond request
//! plumbing.

pub mod error;
pub mod routes;
pub mod state;

use axum::extract::{DefaultBodyLimit, State};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::AppState;

/// Assemble the application router.
///
/// Body size limit: 2 MiB — generous for 60-coordinate requests, tight
/// enough to stop oversized bodies before JSON parsing.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::prove::router())
        .merge(routes::verify::router())
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .with_state(state);

    Router::new().merge(health).merge(api)
}

/// Liveness probe — 200 whenever the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — the proving context exists before the listener
/// opens, so readiness reduces to a sanity check on the cached metrics.
async fn readiness(State(state): State<AppState>) -> &'static str {
    debug_assert!(state.zkp.nb_constraints() > 0);
    "ready"
}
