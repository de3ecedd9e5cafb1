//! # API Shared
//!
//! Shared request/response types and services for the FundLens APIs.
//!
//! Contains:
//! - JSON wire types (`dto` module), annotated for OpenAPI generation
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the `fundlens-run` binary.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
