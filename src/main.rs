use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use lec2023_api::api::create_app;
use lec2023_api::config::{DatabaseConfig, EnvironmentConfig};
use lec2023_api::database::DatabaseConnection;
use lec2023_api::repositories::MySqlTeamRepository;
use lec2023_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🎮 API LEC 2023 - League Of Legends EMEA Championship");
    info!("====================================================");

    let env_config = EnvironmentConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    // Sin pool: cada request abre y cierra su propia conexión
    let db_connection = DatabaseConnection::new(&db_config);
    info!("🗄️ Base de datos: {}", db_connection.target());

    let repository = Arc::new(MySqlTeamRepository::new(db_connection));
    let addr = env_config.socket_addr()?;
    let app = create_app(AppState::new(repository));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    / - Endpoint de prueba");
    info!("   GET    /lec2023 - Listar equipos");
    info!("   GET    /lec2023/:idEquipo - Obtener equipo");
    info!("   POST   /lec2023 - Crear equipo");
    info!("   PUT    /lec2023/:idEquipo - Actualizar equipo");
    info!("   PATCH  /lec2023/:idEquipo - Actualizar equipo parcialmente");
    info!("   DELETE /lec2023/:idEquipo - Eliminar equipo");
    info!("📚 Documentación:");
    info!("   GET    /api-docs - Swagger UI");
    info!("   GET    /api-docs-json - Documento OpenAPI");
    info!("   GET    /api-docs-redoc - ReDoc");
    info!("   GET    /redoc - ReDoc");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el manejador de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el manejador de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
