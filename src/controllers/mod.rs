pub mod team_controller;
