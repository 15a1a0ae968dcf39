pub mod api;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod store;
