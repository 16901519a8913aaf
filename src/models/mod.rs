//! Modelos de datos
//!
//! Entidades que mapean a las tablas de la base de datos.

pub mod team;

pub use team::{Team, TeamAssignment, TeamData, TeamField};
