pub mod routes;

use std::path::Path;

use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::database::SharedStore;
use routes::{activities, activity};

/// Builds the full application: API routes, the landing redirect and `/static`.
pub fn router(store: SharedStore, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_id/signup",
            post(activity::activity_signup_handler),
        )
        .route(
            "/activities/:activity_id/participants",
            delete(activity::activity_unregister_handler),
        )
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        // Rosters change between requests; never let a browser reuse a listing.
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
