//! Documentación OpenAPI
//!
//! El documento se genera a partir de las anotaciones `#[utoipa::path]` de
//! cada ruta y se sirve como JSON, Swagger UI y ReDoc.

use axum::Router;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::dto::team_dto::{InsertResult, PartialTeamRequest, ResultResponse, TeamRequest};
use crate::models::Team;
use crate::routes::team_routes;
use crate::state::AppState;

pub const DOCS_UI_PATH: &str = "/api-docs";
pub const DOCS_JSON_PATH: &str = "/api-docs-json";
pub const DOCS_REDOC_PATH: &str = "/api-docs-redoc";
pub const REDOC_ALIAS_PATH: &str = "/redoc";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API LEC 2023",
        version = "1.0.0",
        description = "API para el League Of Legends EMEA Championship 2023"
    ),
    servers(
        (url = "https://final-api-production.up.railway.app", description = "Servidor en Railway para API LEC 2023")
    ),
    paths(
        team_routes::list_teams,
        team_routes::get_team,
        team_routes::create_team,
        team_routes::update_team,
        team_routes::patch_team,
        team_routes::delete_team
    ),
    components(schemas(Team, TeamRequest, PartialTeamRequest, InsertResult, ResultResponse)),
    tags(
        (name = "Consultar", description = "Operaciones de consulta de Equipos."),
        (name = "Agregar", description = "Operacion para agregar Equipo."),
        (name = "Editar", description = "Operaciones de edición de Equipos."),
        (name = "Eliminar", description = "Operacion para eliminar un Equipo.")
    )
)]
pub struct ApiDoc;

/// Crear el router de documentación
pub fn create_docs_router() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new(DOCS_UI_PATH).url(DOCS_JSON_PATH, ApiDoc::openapi()))
        .merge(Redoc::with_url(DOCS_REDOC_PATH, ApiDoc::openapi()))
        .merge(Redoc::with_url(REDOC_ALIAS_PATH, ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> serde_json::Value {
        serde_json::to_value(ApiDoc::openapi()).unwrap()
    }

    #[test]
    fn test_document_covers_every_operation() {
        let doc = document();

        let collection = &doc["paths"]["/lec2023"];
        assert!(collection["get"].is_object());
        assert!(collection["post"].is_object());

        let item = &doc["paths"]["/lec2023/{idEquipo}"];
        for method in ["get", "put", "patch", "delete"] {
            assert!(item[method].is_object(), "falta {} /lec2023/{{idEquipo}}", method);
        }
    }

    #[test]
    fn test_document_metadata() {
        let doc = document();
        assert_eq!(doc["info"]["title"], "API LEC 2023");
        assert_eq!(doc["info"]["version"], "1.0.0");
        assert_eq!(doc["servers"][0]["url"], "https://final-api-production.up.railway.app");

        let tags: Vec<_> = doc["tags"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(tags, vec!["Consultar", "Agregar", "Editar", "Eliminar"]);
    }

    #[test]
    fn test_team_schema_is_registered() {
        let doc = document();
        let team = &doc["components"]["schemas"]["Team"];
        assert!(team["properties"]["nombre"].is_object());
        assert!(team["properties"]["acronimo"].is_object());
        assert!(team["properties"]["pais"].is_object());
    }
}
