//! Token service module for JWT management
//!
//! Session tokens are HS256-signed JWTs issued after a successful
//! verification or login and checked on every authenticated request.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
