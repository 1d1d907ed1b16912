pub mod config;
pub mod database;
pub mod desk;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;

pub use config::Config;
