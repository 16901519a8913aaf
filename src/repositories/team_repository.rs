use async_trait::async_trait;
use futures::FutureExt;
use sqlx::{MySql, QueryBuilder};
use tracing::debug;

use crate::database::DatabaseConnection;
use crate::dto::team_dto::InsertResult;
use crate::models::{Team, TeamAssignment, TeamData};
use crate::utils::errors::{AppError, AppResult, NO_FIELDS_MESSAGE};

/// Operaciones de almacenamiento sobre la tabla equipo.
///
/// Cada método corresponde a una única sentencia SQL. Las operaciones de
/// escritura devuelven el número de filas afectadas; decidir si eso es un
/// 404 le corresponde al controlador.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    async fn list_all(&self) -> AppResult<Vec<Team>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Vec<Team>>;

    async fn create(&self, data: TeamData) -> AppResult<InsertResult>;

    async fn update(&self, id: i64, data: TeamData) -> AppResult<u64>;

    async fn update_partial(&self, id: i64, assignments: Vec<TeamAssignment>) -> AppResult<u64>;

    async fn delete(&self, id: i64) -> AppResult<u64>;
}

/// Construir el UPDATE de una actualización parcial.
///
/// Solo los nombres de columna forman parte del texto SQL; todos los
/// valores, incluido el id, van como parámetros posicionales.
pub fn build_partial_update(
    id: i64,
    assignments: Vec<TeamAssignment>,
) -> AppResult<QueryBuilder<'static, MySql>> {
    if assignments.is_empty() {
        return Err(AppError::BadRequest(NO_FIELDS_MESSAGE.to_string()));
    }

    let mut builder = QueryBuilder::new("UPDATE equipo SET ");
    {
        let mut separated = builder.separated(", ");
        for assignment in assignments {
            separated.push(assignment.field.column());
            separated.push_unseparated(" = ");
            separated.push_bind_unseparated(assignment.value);
        }
    }
    builder.push(" WHERE id = ");
    builder.push_bind(id);

    Ok(builder)
}

pub struct MySqlTeamRepository {
    db: DatabaseConnection,
}

impl MySqlTeamRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeamRepository for MySqlTeamRepository {
    async fn list_all(&self) -> AppResult<Vec<Team>> {
        self.db
            .run(|conn| {
                sqlx::query_as::<_, Team>("SELECT * FROM equipo")
                    .fetch_all(conn)
                    .boxed()
            })
            .await
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Vec<Team>> {
        self.db
            .run(move |conn| {
                sqlx::query_as::<_, Team>("SELECT * FROM equipo WHERE id = ?")
                    .bind(id)
                    .fetch_all(conn)
                    .boxed()
            })
            .await
    }

    async fn create(&self, data: TeamData) -> AppResult<InsertResult> {
        let done = self
            .db
            .run(move |conn| {
                sqlx::query("INSERT INTO equipo (nombre, acronimo, pais) VALUES (?, ?, ?)")
                    .bind(data.name)
                    .bind(data.acronym)
                    .bind(data.country)
                    .execute(conn)
                    .boxed()
            })
            .await?;

        debug!("➕ Equipo insertado con id {}", done.last_insert_id());
        Ok(InsertResult::new(done.rows_affected(), done.last_insert_id()))
    }

    async fn update(&self, id: i64, data: TeamData) -> AppResult<u64> {
        let done = self
            .db
            .run(move |conn| {
                sqlx::query("UPDATE equipo SET nombre = ?, acronimo = ?, pais = ? WHERE id = ?")
                    .bind(data.name)
                    .bind(data.acronym)
                    .bind(data.country)
                    .bind(id)
                    .execute(conn)
                    .boxed()
            })
            .await?;

        Ok(done.rows_affected())
    }

    async fn update_partial(&self, id: i64, assignments: Vec<TeamAssignment>) -> AppResult<u64> {
        let mut builder = build_partial_update(id, assignments)?;
        debug!("✏️ {}", builder.sql());

        let done = self
            .db
            .run(move |conn| async move { builder.build().execute(conn).await }.boxed())
            .await?;

        Ok(done.rows_affected())
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        let done = self
            .db
            .run(move |conn| {
                sqlx::query("DELETE FROM equipo WHERE id = ?")
                    .bind(id)
                    .execute(conn)
                    .boxed()
            })
            .await?;

        Ok(done.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamField;

    fn assignment(field: TeamField, value: &str) -> TeamAssignment {
        TeamAssignment {
            field,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_single_field_update_sql() {
        let builder =
            build_partial_update(3, vec![assignment(TeamField::Country, "España")]).unwrap();
        assert_eq!(builder.sql(), "UPDATE equipo SET pais = ? WHERE id = ?");
    }

    #[test]
    fn test_all_fields_update_sql() {
        let builder = build_partial_update(
            3,
            vec![
                assignment(TeamField::Name, "Team Heretics"),
                assignment(TeamField::Acronym, "TH"),
                assignment(TeamField::Country, "España"),
            ],
        )
        .unwrap();
        assert_eq!(
            builder.sql(),
            "UPDATE equipo SET nombre = ?, acronimo = ?, pais = ? WHERE id = ?"
        );
    }

    #[test]
    fn test_values_never_reach_sql_text() {
        let builder = build_partial_update(
            3,
            vec![assignment(TeamField::Name, "x'; DROP TABLE equipo; --")],
        )
        .unwrap();
        assert!(!builder.sql().contains("DROP"));
    }

    #[test]
    fn test_empty_update_is_rejected() {
        assert!(matches!(
            build_partial_update(3, Vec::new()),
            Err(AppError::BadRequest(_))
        ));
    }
}
