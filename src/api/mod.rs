//! API endpoints
//!
//! Este módulo arma el router completo de la aplicación.

pub mod docs;

use axum::{routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::middleware::cors_middleware;
use crate::routes::team_routes::create_team_router;
use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .nest("/lec2023", create_team_router())
        .merge(docs::create_docs_router())
}

/// Crear la aplicación completa, con estado y middleware
pub fn create_app(state: AppState) -> Router {
    create_api_router()
        .layer(
            // Una línea de acceso por request, visible con el nivel INFO por defecto
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_middleware())
        .with_state(state)
}

async fn root() -> &'static str {
    "hello, world!"
}
