pub mod team_dto;
