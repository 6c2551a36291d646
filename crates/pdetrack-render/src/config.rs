//! Presentation configuration
//!
//! [`ReportConfig`] is what the renderers consume. It can be built in code or
//! loaded from a TOML file where every key is optional:
//!
//! ```toml
//! title = "OBVFSJ - Suivi des objectifs du PDE 2024-2034"
//! logo_url = "https://example.org/logo.png"
//! generated_date = "2026-01-13"
//!
//! [color_theme]
//! primary = "#0083cb"
//! accent = "#0aa6b6"
//! ```

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default report title
pub const DEFAULT_TITLE: &str = "OBVFSJ - Suivi des objectifs du PDE 2024-2034";

/// Default header logo
pub const DEFAULT_LOGO_URL: &str =
    "https://obvfleuvestjean.com/wp-content/uploads/2026/01/LogoOBV_ContourBlanc.png";

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Colors used by the generated stylesheet
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorTheme {
    /// Links, headings, active navigation entry
    pub primary: String,
    /// Section headers and progress bar fill
    pub accent: String,
    pub background: String,
    pub text: String,
    /// Secondary text (dates, item metadata)
    pub muted: String,
    /// Progress bar track
    pub track: String,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: "#0083cb".into(),
            accent: "#0aa6b6".into(),
            background: "#ffffff".into(),
            text: "#222222".into(),
            muted: "#666666".into(),
            track: "#f0f0f0".into(),
        }
    }
}

/// Options shared by every rendered page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    pub title: String,
    pub logo_url: String,
    /// "Last updated" stamp printed in the page header
    pub generated_date: NaiveDate,
    pub color_theme: ColorTheme,
}

impl Default for ReportConfig {
    /// Built-in defaults, stamped with today's date
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl ReportConfig {
    /// Built-in defaults with an explicit stamp
    pub fn new(generated_date: NaiveDate) -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            logo_url: DEFAULT_LOGO_URL.into(),
            generated_date,
            color_theme: ColorTheme::default(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn logo_url(mut self, url: impl Into<String>) -> Self {
        self.logo_url = url.into();
        self
    }

    pub fn generated_date(mut self, date: NaiveDate) -> Self {
        self.generated_date = date;
        self
    }

    pub fn color_theme(mut self, theme: ColorTheme) -> Self {
        self.color_theme = theme;
        self
    }

    /// Apply a config file on top of the defaults.
    ///
    /// `today` is used when the file does not pin `generated_date`.
    pub fn from_file(file: ReportConfigFile, today: NaiveDate) -> Self {
        let mut config = Self::new(file.generated_date.unwrap_or(today));
        if let Some(title) = file.title {
            config.title = title;
        }
        if let Some(logo_url) = file.logo_url {
            config.logo_url = logo_url;
        }
        if let Some(theme) = file.color_theme {
            config.color_theme = theme;
        }
        config
    }
}

/// On-disk form of [`ReportConfig`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfigFile {
    pub title: Option<String>,
    pub logo_url: Option<String>,
    pub generated_date: Option<NaiveDate>,
    pub color_theme: Option<ColorTheme>,
}

impl ReportConfigFile {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }
}
