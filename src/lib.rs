pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod services;
