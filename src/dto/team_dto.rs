use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{TeamAssignment, TeamData, TeamField};
use crate::utils::errors::{AppError, AppResult, MISSING_FIELDS_MESSAGE};

// Request para crear o reemplazar un equipo (POST y PUT)
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct TeamRequest {
    #[serde(rename = "nombre")]
    #[validate(required, length(min = 1))]
    #[schema(example = "G2 Esports")]
    pub name: Option<String>,

    #[serde(rename = "acronimo")]
    #[validate(required, length(min = 1))]
    #[schema(example = "G2")]
    pub acronym: Option<String>,

    #[serde(rename = "pais")]
    #[validate(required, length(min = 1))]
    #[schema(example = "Alemania")]
    pub country: Option<String>,
}

impl TeamRequest {
    /// Validar que los tres campos estén presentes y no vacíos
    pub fn into_data(self) -> AppResult<TeamData> {
        self.validate()?;

        match (self.name, self.acronym, self.country) {
            (Some(name), Some(acronym), Some(country)) => Ok(TeamData {
                name,
                acronym,
                country,
            }),
            _ => Err(AppError::BadRequest(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }
}

// Request para actualizar parcialmente un equipo (PATCH)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PartialTeamRequest {
    #[serde(rename = "nombre")]
    #[schema(example = "G2 Esports")]
    pub name: Option<String>,

    #[serde(rename = "acronimo")]
    #[schema(example = "G2")]
    pub acronym: Option<String>,

    #[serde(rename = "pais")]
    #[schema(example = "España")]
    pub country: Option<String>,
}

impl PartialTeamRequest {
    fn value_of(&self, field: TeamField) -> Option<&String> {
        match field {
            TeamField::Name => self.name.as_ref(),
            TeamField::Acronym => self.acronym.as_ref(),
            TeamField::Country => self.country.as_ref(),
        }
    }

    /// Asignaciones de los campos presentes, en orden nombre, acrónimo, país.
    /// Un string vacío cuenta como ausente.
    pub fn assignments(&self) -> Vec<TeamAssignment> {
        TeamField::ALL
            .iter()
            .filter_map(|&field| {
                self.value_of(field)
                    .filter(|value| !value.is_empty())
                    .map(|value| TeamAssignment {
                        field,
                        value: value.clone(),
                    })
            })
            .collect()
    }
}

// Resultado de un INSERT, tal como lo reporta MySQL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    #[schema(example = 0)]
    pub field_count: u32,
    #[schema(example = 1)]
    pub affected_rows: u64,
    #[schema(example = 11)]
    pub insert_id: u64,
}

impl InsertResult {
    pub fn new(affected_rows: u64, insert_id: u64) -> Self {
        Self {
            field_count: 0,
            affected_rows,
            insert_id,
        }
    }
}

// Response de confirmación
#[derive(Debug, Serialize, ToSchema)]
pub struct ResultResponse {
    #[serde(rename = "resultado")]
    #[schema(example = "Equipo actualizado")]
    pub result: String,
}

impl ResultResponse {
    pub fn new(result: &str) -> Self {
        Self {
            result: result.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> TeamRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_complete_request_is_accepted() {
        let data = request(json!({ "nombre": "Fnatic", "acronimo": "FNC", "pais": "Reino Unido" }))
            .into_data()
            .unwrap();
        assert_eq!(data.name, "Fnatic");
        assert_eq!(data.acronym, "FNC");
        assert_eq!(data.country, "Reino Unido");
    }

    #[test]
    fn test_missing_or_empty_field_is_rejected() {
        let missing = request(json!({ "nombre": "Fnatic", "acronimo": "FNC" }));
        assert!(matches!(missing.into_data(), Err(AppError::Validation(_))));

        let empty = request(json!({ "nombre": "Fnatic", "acronimo": "", "pais": "Reino Unido" }));
        assert!(matches!(empty.into_data(), Err(AppError::Validation(_))));

        assert!(TeamRequest::default().into_data().is_err());
    }

    #[test]
    fn test_assignments_follow_field_order() {
        let partial: PartialTeamRequest =
            serde_json::from_value(json!({ "pais": "España", "nombre": "G2" })).unwrap();
        let fields: Vec<_> = partial.assignments().iter().map(|a| a.field).collect();
        assert_eq!(fields, vec![TeamField::Name, TeamField::Country]);
    }

    #[test]
    fn test_empty_strings_are_not_assignments() {
        let partial: PartialTeamRequest =
            serde_json::from_value(json!({ "nombre": "", "acronimo": "" })).unwrap();
        assert!(partial.assignments().is_empty());
    }

    #[test]
    fn test_insert_result_shape() {
        let value = serde_json::to_value(InsertResult::new(1, 42)).unwrap();
        assert_eq!(value, json!({ "fieldCount": 0, "affectedRows": 1, "insertId": 42 }));
    }
}
