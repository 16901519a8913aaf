use std::sync::Arc;

use tracing::info;

use crate::dto::team_dto::{InsertResult, PartialTeamRequest, ResultResponse, TeamRequest};
use crate::models::Team;
use crate::repositories::TeamRepository;
use crate::utils::errors::{team_not_found, AppError, AppResult, NO_FIELDS_MESSAGE};

pub const TEAM_UPDATED: &str = "Equipo actualizado";
pub const TEAM_PARTIALLY_UPDATED: &str = "Equipo actualizado parcialmente";
pub const TEAM_DELETED: &str = "Equipo eliminado";

pub struct TeamController {
    repository: Arc<dyn TeamRepository>,
}

impl TeamController {
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Team>> {
        self.repository.list_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Vec<Team>> {
        let teams = self.repository.find_by_id(id).await?;
        if teams.is_empty() {
            return Err(team_not_found());
        }

        Ok(teams)
    }

    pub async fn create(&self, request: TeamRequest) -> AppResult<InsertResult> {
        let data = request.into_data()?;

        let result = self.repository.create(data).await?;
        info!("✅ Equipo creado con id {}", result.insert_id);

        Ok(result)
    }

    pub async fn update(&self, id: i64, request: TeamRequest) -> AppResult<ResultResponse> {
        let data = request.into_data()?;

        let affected = self.repository.update(id, data).await?;
        confirm_single_row(affected)?;

        info!("✏️ Equipo {} actualizado", id);
        Ok(ResultResponse::new(TEAM_UPDATED))
    }

    pub async fn update_partial(
        &self,
        id: i64,
        request: PartialTeamRequest,
    ) -> AppResult<ResultResponse> {
        let assignments = request.assignments();
        if assignments.is_empty() {
            return Err(AppError::BadRequest(NO_FIELDS_MESSAGE.to_string()));
        }

        let affected = self.repository.update_partial(id, assignments).await?;
        confirm_single_row(affected)?;

        info!("✏️ Equipo {} actualizado parcialmente", id);
        Ok(ResultResponse::new(TEAM_PARTIALLY_UPDATED))
    }

    pub async fn delete(&self, id: i64) -> AppResult<ResultResponse> {
        let affected = self.repository.delete(id).await?;
        confirm_single_row(affected)?;

        info!("🗑️ Equipo {} eliminado", id);
        Ok(ResultResponse::new(TEAM_DELETED))
    }
}

/// Una escritura sobre un id existente afecta exactamente una fila
fn confirm_single_row(affected: u64) -> AppResult<()> {
    if affected == 1 {
        Ok(())
    } else {
        Err(team_not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_one_affected_row_is_success() {
        assert!(confirm_single_row(1).is_ok());
        assert!(matches!(confirm_single_row(0), Err(AppError::NotFound(_))));
        assert!(matches!(confirm_single_row(2), Err(AppError::NotFound(_))));
    }
}
