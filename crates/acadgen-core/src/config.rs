//! Site configuration for the homepage generators.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for acadgen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings shared by every generated page.
    #[serde(default)]
    pub site: SiteConfig,

    /// Publication page settings.
    #[serde(default)]
    pub publications: PublicationsConfig,

    /// Presentation page settings.
    #[serde(default)]
    pub presentations: PresentationsConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Name shown in the page footer copyright line.
    #[serde(default = "default_copyright")]
    pub copyright: String,

    /// Relative URL of the homepage, used by the "Back to home" link.
    #[serde(default = "default_home_url")]
    pub home_url: String,

    /// Stylesheet path referenced from each page head.
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,

    /// Favicon path referenced from each page head.
    #[serde(default = "default_favicon")]
    pub favicon: String,

    /// Google Analytics tag id; the analytics snippet is omitted when unset.
    #[serde(default)]
    pub analytics_id: Option<String>,
}

/// Publication page configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationsConfig {
    /// Page title.
    #[serde(default = "default_publications_title")]
    pub page_title: String,

    /// Heading for the first-author table.
    #[serde(default = "default_first_heading")]
    pub first_author_heading: String,

    /// Heading for the Nth-author table.
    #[serde(default = "default_nth_heading")]
    pub nth_author_heading: String,

    /// Author lists longer than this truncate to the first three plus "et al."
    /// in the first-author table.
    #[serde(default = "default_max_authors")]
    pub max_authors: usize,
}

/// Presentation page configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentationsConfig {
    /// Page title.
    #[serde(default = "default_presentations_title")]
    pub page_title: String,

    /// Heading for the domestic table.
    #[serde(default = "default_domestic_heading")]
    pub domestic_heading: String,

    /// Heading for the international table.
    #[serde(default = "default_international_heading")]
    pub international_heading: String,
}

// Default value functions
fn default_copyright() -> String {
    "Site Owner".to_string()
}

fn default_home_url() -> String {
    "index.html".to_string()
}

fn default_stylesheet() -> String {
    "common/css/site.css".to_string()
}

fn default_favicon() -> String {
    "fig/favicon.ico".to_string()
}

fn default_publications_title() -> String {
    "Publications".to_string()
}

fn default_first_heading() -> String {
    "Refereed Articles (First author)".to_string()
}

fn default_nth_heading() -> String {
    "Refereed Articles (Nth author)".to_string()
}

fn default_max_authors() -> usize {
    3
}

fn default_presentations_title() -> String {
    "Presentations".to_string()
}

fn default_domestic_heading() -> String {
    "Domestic Presentations".to_string()
}

fn default_international_heading() -> String {
    "International Presentations".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            copyright: default_copyright(),
            home_url: default_home_url(),
            stylesheet: default_stylesheet(),
            favicon: default_favicon(),
            analytics_id: None,
        }
    }
}

impl Default for PublicationsConfig {
    fn default() -> Self {
        Self {
            page_title: default_publications_title(),
            first_author_heading: default_first_heading(),
            nth_author_heading: default_nth_heading(),
            max_authors: default_max_authors(),
        }
    }
}

impl Default for PresentationsConfig {
    fn default() -> Self {
        Self {
            page_title: default_presentations_title(),
            domestic_heading: default_domestic_heading(),
            international_heading: default_international_heading(),
        }
    }
}

impl Config {
    /// Load configuration from a file, with environment overrides.
    ///
    /// Environment variables prefixed with `ACADGEN` override file values,
    /// e.g. `ACADGEN__SITE__COPYRIGHT`.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("ACADGEN").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with optional file override.
    ///
    /// Falls back to `acadgen.toml` in the working directory, then to
    /// defaults when no file exists.
    pub fn load_or_default(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new("acadgen.toml");
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    tracing::info!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.copyright.is_empty() {
            return Err(CoreError::config("site.copyright cannot be empty"));
        }

        if self.publications.max_authors == 0 {
            return Err(CoreError::config(
                "publications.max_authors must be at least 1",
            ));
        }

        Ok(())
    }
}
