//! Middleware de CORS
//!
//! La API es pública y se consume desde la documentación interactiva y
//! desde cualquier origen.

use tower_http::cors::CorsLayer;

/// Crear middleware de CORS que permite cualquier origen
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
