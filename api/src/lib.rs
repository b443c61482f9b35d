//! HTTP layer for the CVACare backend
//!
//! Exposes the account and email verification flows under `/api/auth` using
//! actix-web. The binary in `main.rs` only loads configuration, builds the
//! collaborators and starts the server; everything else lives here so that
//! integration tests can build the same application.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{create_app, AppState};
