//! Configuración de base de datos
//!
//! Este módulo construye las opciones de conexión a MySQL a partir de las
//! variables de entorno. Cada variable acepta dos nombres: el `DB_*` y el
//! `MYSQL*` que inyecta Railway; el primero tiene prioridad.

use anyhow::{Context, Result};
use sqlx::mysql::MySqlConnectOptions;

/// Configuración de la base de datos
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            user: "root".to_string(),
            password: String::new(),
            database: "lec2023".to_string(),
            port: 3306,
        }
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("port", &self.port)
            .finish()
    }
}

impl DatabaseConfig {
    /// Leer la configuración desde el entorno del proceso
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Leer la configuración desde una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |primary: &str, fallback: &str| lookup(primary).or_else(|| lookup(fallback));

        let port = match get("DB_PORT", "MYSQLPORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("DB_PORT/MYSQLPORT inválido: '{}'", raw))?,
            None => defaults.port,
        };

        Ok(Self {
            host: get("DB_HOST", "MYSQLHOST").unwrap_or(defaults.host),
            user: get("DB_USER", "MYSQLUSER").unwrap_or(defaults.user),
            password: get("DB_PASSWORD", "MYSQLPASSWORD").unwrap_or(defaults.password),
            database: get("DB_DATABASE", "MYSQLDATABASE").unwrap_or(defaults.database),
            port,
        })
    }

    /// Opciones de conexión para sqlx
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }

    /// Destino de la conexión sin credenciales, apto para logs
    pub fn masked_target(&self) -> String {
        format!("mysql://{}:***@{}:{}/{}", self.user, self.host, self.port, self.database)
    }
}
