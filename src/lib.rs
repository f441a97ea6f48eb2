pub mod config;
pub mod db;
pub mod domain;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Version reported in the `meta` block of every API response.
pub const API_VERSION: &str = "1.0.0";
