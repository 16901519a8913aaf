//! Conexión a MySQL
//!
//! Cada operación abre su propia conexión y la cierra al terminar. No hay
//! pool: la conexión vive exactamente lo que dura una sentencia.

use futures::future::BoxFuture;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;
use tracing::{debug, warn};

use crate::config::DatabaseConfig;
use crate::utils::errors::AppResult;

/// Fábrica de conexiones de una sola sentencia
#[derive(Debug, Clone)]
pub struct DatabaseConnection {
    options: MySqlConnectOptions,
    target: String,
}

impl DatabaseConnection {
    pub fn new(config: &DatabaseConfig) -> Self {
        Self {
            options: config.connect_options(),
            target: config.masked_target(),
        }
    }

    /// Destino de la conexión sin credenciales
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Abrir una conexión nueva
    async fn acquire(&self) -> Result<MySqlConnection, sqlx::Error> {
        debug!("🔌 Abriendo conexión a {}", self.target);
        MySqlConnection::connect_with(&self.options).await
    }

    /// Cerrar una conexión, se haya ejecutado la sentencia con éxito o no.
    /// Un fallo al cerrar solo se registra: el resultado ya está decidido.
    async fn release(&self, connection: MySqlConnection) {
        if let Err(e) = connection.close().await {
            warn!("⚠️ Error cerrando conexión a {}: {}", self.target, e);
        }
    }

    /// Ejecutar una operación sobre una conexión propia.
    ///
    /// La conexión se cierra siempre antes de devolver el resultado, tanto
    /// si la operación termina bien como si falla.
    pub async fn run<T, F>(&self, operation: F) -> AppResult<T>
    where
        T: Send,
        F: for<'c> FnOnce(&'c mut MySqlConnection) -> BoxFuture<'c, Result<T, sqlx::Error>>
            + Send,
    {
        let mut connection = self.acquire().await?;
        let result = operation(&mut connection).await;
        self.release(connection).await;

        Ok(result?)
    }
}
