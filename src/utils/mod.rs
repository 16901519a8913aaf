//! Utilidades del sistema
//!
//! Manejo de errores y validación de parámetros comunes a todas las rutas.

pub mod errors;
pub mod validation;
