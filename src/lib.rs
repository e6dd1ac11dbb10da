// Gateway and backend accessors for the Pulse administration dashboard

pub mod api;
pub mod config;
pub mod models;
pub mod services;
