//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de base de datos y del servidor,
//! leída una sola vez al arrancar.

pub mod database;
pub mod environment;

pub use database::DatabaseConfig;
pub use environment::EnvironmentConfig;
