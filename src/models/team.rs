//! Modelo de Equipo
//!
//! Mapea exactamente a la tabla `equipo(id, nombre, acronimo, pais)`.
//! Los nombres de columna son también las claves del JSON.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Equipo - mapea exactamente a la tabla equipo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Team {
    /// ID del equipo
    #[schema(example = 1)]
    pub id: i64,

    /// Nombre del equipo
    #[serde(rename = "nombre")]
    #[sqlx(rename = "nombre")]
    #[schema(example = "G2 Esports")]
    pub name: String,

    /// Acrónimo del equipo
    #[serde(rename = "acronimo")]
    #[sqlx(rename = "acronimo")]
    #[schema(example = "G2")]
    pub acronym: String,

    /// País del equipo
    #[serde(rename = "pais")]
    #[sqlx(rename = "pais")]
    #[schema(example = "Alemania")]
    pub country: String,
}

/// Datos completos de un equipo, ya validados
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamData {
    pub name: String,
    pub acronym: String,
    pub country: String,
}

/// Campos editables de un equipo, en el orden en que se asignan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamField {
    Name,
    Acronym,
    Country,
}

impl TeamField {
    pub const ALL: [TeamField; 3] = [TeamField::Name, TeamField::Acronym, TeamField::Country];

    /// Columna de la tabla equipo
    pub fn column(&self) -> &'static str {
        match self {
            TeamField::Name => "nombre",
            TeamField::Acronym => "acronimo",
            TeamField::Country => "pais",
        }
    }
}

/// Asignación `columna = valor` de una actualización parcial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamAssignment {
    pub field: TeamField,
    pub value: String,
}

impl Team {
    pub fn new(id: i64, data: TeamData) -> Self {
        Self {
            id,
            name: data.name,
            acronym: data.acronym,
            country: data.country,
        }
    }

    /// Aplicar una asignación en memoria
    pub fn apply(&mut self, assignment: &TeamAssignment) {
        let value = assignment.value.clone();
        match assignment.field {
            TeamField::Name => self.name = value,
            TeamField::Acronym => self.acronym = value,
            TeamField::Country => self.country = value,
        }
    }
}
