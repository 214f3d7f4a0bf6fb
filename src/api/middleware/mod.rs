//! HTTP middleware for request processing and protection.

pub mod auth;
pub mod recover;
pub mod tracing;
