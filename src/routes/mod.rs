pub mod car_routes;
pub mod status_routes;
