//! HTTP handlers for the ideas service.

pub mod app;
pub mod generate;
pub mod health;
pub mod metrics;
