use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use lec2023_api::api::create_app;
use lec2023_api::dto::team_dto::InsertResult;
use lec2023_api::models::{Team, TeamAssignment, TeamData};
use lec2023_api::repositories::TeamRepository;
use lec2023_api::state::AppState;
use lec2023_api::utils::errors::AppResult;

// Salida de logs compartida entre el subscriber y el test
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = SharedBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

// Tabla vacía: basta para que las rutas respondan
struct EmptyTeamRepository;

#[async_trait]
impl TeamRepository for EmptyTeamRepository {
    async fn list_all(&self) -> AppResult<Vec<Team>> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: i64) -> AppResult<Vec<Team>> {
        Ok(Vec::new())
    }

    async fn create(&self, _data: TeamData) -> AppResult<InsertResult> {
        Ok(InsertResult::new(1, 1))
    }

    async fn update(&self, _id: i64, _data: TeamData) -> AppResult<u64> {
        Ok(0)
    }

    async fn update_partial(&self, _id: i64, _assignments: Vec<TeamAssignment>) -> AppResult<u64> {
        Ok(0)
    }

    async fn delete(&self, _id: i64) -> AppResult<u64> {
        Ok(0)
    }
}

#[tokio::test]
async fn test_requests_are_logged_at_info() {
    let buffer = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_writer(buffer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let state = AppState::new(Arc::new(EmptyTeamRepository));
    let server = TestServer::new(create_app(state)).unwrap();

    let response = server.get("/lec2023").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let logs = buffer.contents();
    assert!(logs.contains("finished processing request"), "logs: {}", logs);
    assert!(logs.contains("INFO"), "logs: {}", logs);
    assert!(logs.contains("/lec2023"), "logs: {}", logs);
}
