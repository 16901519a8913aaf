use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};
use tracing::warn;

use crate::controllers::team_controller::TeamController;
use crate::dto::team_dto::{InsertResult, PartialTeamRequest, ResultResponse, TeamRequest};
use crate::models::Team;
use crate::state::AppState;
use crate::utils::errors::{AppError, MISSING_FIELDS_MESSAGE};
use crate::utils::validation::parse_team_id;

pub fn create_team_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_teams).post(create_team))
        .route(
            "/:id_equipo",
            get(get_team)
                .put(update_team)
                .patch(patch_team)
                .delete(delete_team),
        )
}

// Un cuerpo ausente o que no es JSON se trata como un objeto vacío, de modo
// que la validación de campos responde con su propio 400. Un JSON con campos
// de tipo incorrecto se rechaza entero: no se aplica una parte del cambio.
fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::JsonDataError(rejection)) => {
            warn!("Cuerpo con campos inválidos: {}", rejection.body_text());
            Err(AppError::BadRequest(MISSING_FIELDS_MESSAGE.to_string()))
        }
        Err(rejection) => {
            warn!("Cuerpo de la solicitud ignorado: {}", rejection.body_text());
            Ok(T::default())
        }
    }
}

/// Obtiene todos los equipos.
#[utoipa::path(
    get,
    path = "/lec2023",
    tag = "Consultar",
    responses(
        (status = 200, description = "Retorna la lista de equipos.", body = [Team]),
        (status = 500, description = "Error en el servidor.")
    )
)]
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<Vec<Team>>, AppError> {
    let controller = TeamController::new(state.repository.clone());
    let teams = controller.list().await?;
    Ok(Json(teams))
}

/// Obtiene un equipo por su ID.
#[utoipa::path(
    get,
    path = "/lec2023/{idEquipo}",
    tag = "Consultar",
    params(
        ("idEquipo" = i64, Path, description = "ID del equipo a obtener.")
    ),
    responses(
        (status = 200, description = "Retorna el equipo solicitado.", body = [Team]),
        (status = 400, description = "El parámetro idEquipo es inválido."),
        (status = 404, description = "El equipo no fue encontrado."),
        (status = 500, description = "Error en el servidor.")
    )
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(id_equipo): Path<String>,
) -> Result<Json<Vec<Team>>, AppError> {
    let id = parse_team_id(&id_equipo)?;
    let controller = TeamController::new(state.repository.clone());
    let teams = controller.get_by_id(id).await?;
    Ok(Json(teams))
}

/// Crea un nuevo equipo.
#[utoipa::path(
    post,
    path = "/lec2023",
    tag = "Agregar",
    request_body(content = TeamRequest, description = "Datos del equipo a crear.", content_type = "application/json"),
    responses(
        (status = 200, description = "Equipo creado exitosamente.", body = InsertResult),
        (status = 400, description = "Faltan campos obligatorios en la solicitud."),
        (status = 500, description = "Error en el servidor.")
    )
)]
pub async fn create_team(
    State(state): State<AppState>,
    payload: Result<Json<TeamRequest>, JsonRejection>,
) -> Result<Json<InsertResult>, AppError> {
    let controller = TeamController::new(state.repository.clone());
    let result = controller.create(body_or_default(payload)?).await?;
    Ok(Json(result))
}

/// Actualiza un equipo por su ID.
#[utoipa::path(
    put,
    path = "/lec2023/{idEquipo}",
    tag = "Editar",
    params(
        ("idEquipo" = i64, Path, description = "ID del equipo a actualizar.")
    ),
    request_body(content = TeamRequest, description = "Datos del equipo a actualizar.", content_type = "application/json"),
    responses(
        (status = 200, description = "Equipo actualizado exitosamente.", body = ResultResponse),
        (status = 400, description = "Faltan campos obligatorios en la solicitud."),
        (status = 404, description = "El equipo no fue encontrado."),
        (status = 500, description = "Error en el servidor.")
    )
)]
pub async fn update_team(
    State(state): State<AppState>,
    Path(id_equipo): Path<String>,
    payload: Result<Json<TeamRequest>, JsonRejection>,
) -> Result<Json<ResultResponse>, AppError> {
    // El id se valida antes que el cuerpo
    let id = parse_team_id(&id_equipo)?;
    let request = body_or_default(payload)?;
    let controller = TeamController::new(state.repository.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

/// Actualiza parcialmente un equipo por su ID.
#[utoipa::path(
    patch,
    path = "/lec2023/{idEquipo}",
    tag = "Editar",
    params(
        ("idEquipo" = i64, Path, description = "ID del equipo a actualizar parcialmente.")
    ),
    request_body(content = PartialTeamRequest, description = "Datos parciales del equipo a actualizar.", content_type = "application/json"),
    responses(
        (status = 200, description = "Equipo actualizado parcialmente exitosamente.", body = ResultResponse),
        (status = 400, description = "Se requiere al menos un campo para actualizar."),
        (status = 404, description = "El equipo no fue encontrado."),
        (status = 500, description = "Error en el servidor.")
    )
)]
pub async fn patch_team(
    State(state): State<AppState>,
    Path(id_equipo): Path<String>,
    payload: Result<Json<PartialTeamRequest>, JsonRejection>,
) -> Result<Json<ResultResponse>, AppError> {
    let id = parse_team_id(&id_equipo)?;
    let request = body_or_default(payload)?;
    let controller = TeamController::new(state.repository.clone());
    let response = controller.update_partial(id, request).await?;
    Ok(Json(response))
}

/// Elimina un equipo por su ID.
#[utoipa::path(
    delete,
    path = "/lec2023/{idEquipo}",
    tag = "Eliminar",
    params(
        ("idEquipo" = i64, Path, description = "ID del equipo a eliminar.")
    ),
    responses(
        (status = 200, description = "Equipo eliminado exitosamente.", body = ResultResponse),
        (status = 404, description = "El equipo no fue encontrado."),
        (status = 500, description = "Error en el servidor.")
    )
)]
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id_equipo): Path<String>,
) -> Result<Json<ResultResponse>, AppError> {
    let id = parse_team_id(&id_equipo)?;
    let controller = TeamController::new(state.repository.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
