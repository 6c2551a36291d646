//! # pdetrack-render
//!
//! Rendering backends for pdetrack reports.
//!
//! This crate provides:
//! - Static multi-page HTML rendering with shared navigation
//! - Plain-text aggregate summary
//! - Presentation configuration (title, logo, date stamp, colors), loadable from TOML
//! - The publishing README written next to the pages
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pdetrack_core::{build_report, Renderer, SourceRow};
//! use pdetrack_render::{HtmlReportRenderer, ReportConfig};
//!
//! let report = build_report(&[
//!     SourceRow::new(3)
//!         .category("2 - Ralentir l'eutrophisation des lacs")
//!         .label("Caractériser 12 lacs")
//!         .achievement("25%"),
//! ]);
//!
//! let config = ReportConfig::new(NaiveDate::from_ymd_opt(2026, 1, 13).unwrap());
//! let pages = HtmlReportRenderer::new(config).render(&report)?;
//!
//! assert_eq!(pages.len(), 6);
//! assert_eq!(pages[0].file_name, "index.html");
//! assert_eq!(pages[2].file_name, "orientation-2.html");
//! # Ok::<(), pdetrack_core::RenderError>(())
//! ```

pub mod config;
pub mod html;
pub mod readme;
pub mod summary;

pub use config::{ColorTheme, ConfigError, ReportConfig, ReportConfigFile};
pub use html::{HtmlReportRenderer, NavEntry, Navigation, RenderedPage};
pub use readme::publish_readme;
pub use summary::SummaryRenderer;

/// HTML-escape a string
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_escape_works() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(html_escape("l'eau"), "l'eau");
    }
}
