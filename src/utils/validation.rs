//! Utilidades de validación
//!
//! Validación del parámetro de ruta `idEquipo`, compartida por las
//! operaciones de consulta, edición y borrado.

use crate::utils::errors::{invalid_id, AppResult};

/// Validar y convertir el parámetro `idEquipo` a entero
///
/// Solo se aceptan enteros en base 10; valores como `"abc"`, `""` o `"1.5"`
/// se rechazan con 400 antes de abrir ninguna conexión.
pub fn parse_team_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>().map_err(|_| invalid_id())
}
