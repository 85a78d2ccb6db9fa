pub mod ipinfo_repository;
pub mod smtp_repository;
