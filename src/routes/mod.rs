pub mod team_routes;
