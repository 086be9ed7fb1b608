//! Plagcheck HTTP server library (router, handlers and health check).

pub mod gateway;
pub mod health;
