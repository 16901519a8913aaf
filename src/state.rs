//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. No guarda datos entre requests: solo el
//! acceso al almacenamiento.

use std::sync::Arc;

use crate::repositories::TeamRepository;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn TeamRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self { repository }
    }
}
