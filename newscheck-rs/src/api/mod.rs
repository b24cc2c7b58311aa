//! HTTP interface for newscheck-rs
//!
//! Serves the interactive analysis form and a JSON scoring endpoint

pub mod handlers;
pub mod server;
pub mod web;

pub use handlers::AppState;
pub use server::ApiServer;
