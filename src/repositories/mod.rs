pub mod car_repository;
