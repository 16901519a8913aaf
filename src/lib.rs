//! API LEC 2023
//!
//! API REST sobre los equipos del League Of Legends EMEA Championship 2023,
//! respaldada por una tabla MySQL y documentada con OpenAPI.

pub mod api;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
