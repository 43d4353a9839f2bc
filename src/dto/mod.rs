//! Request and response schemas of the HTTP API.

pub mod car_dto;
