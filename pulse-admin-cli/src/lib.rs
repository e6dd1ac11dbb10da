// Library exports for the Pulse admin client
// This allows testing of internal modules

pub mod api;
pub mod commands;
pub mod config;
pub mod models;
pub mod pages;
pub mod ui;
pub mod view;
