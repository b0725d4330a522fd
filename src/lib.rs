pub mod api;
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod templates;
pub mod utils;
pub mod view;
