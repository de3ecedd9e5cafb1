//! # FundLens Core
//!
//! Presentation logic for the FundLens fund dashboard.
//!
//! This crate contains pure text and geometry operations:
//! - Turning AI-generated market commentary into HTML "strategy cards"
//! - SVG geometry for sparklines, NAV curves, radar charts and scenario lines
//! - Small label helpers (grades, sentiment, sector icons)
//! - Holding diagnostics such as loss-recovery time
//!
//! **No API concerns**: HTTP servers and request/response types belong in `api-rest` and
//! `api-shared`.

pub mod charts;
pub mod config;
pub mod constants;
pub mod error;
pub mod labels;
pub mod portfolio;
pub mod render;
pub mod validation;

pub use config::{resolve_renderer_config, RendererConfig, SectionRule};
pub use error::{RenderError, RenderResult};
pub use render::{fallback, CardRenderer, CardStyle, InlinePass};
