//! Adapters - Implementations of ports and the HTTP surface.
//!
//! - `memory` - In-memory `ProjectStore`
//! - `export` - Markdown and HTML `ReportExporter`s
//! - `http` - Axum router for the dashboard front-end

pub mod export;
pub mod http;
pub mod memory;
