//! Configuration types for the site

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Capability scopes requested from the wallet library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Write to the user's storage hub
    StoreWrite,
    /// Publish data other apps can read
    PublishData,
}

/// Main site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Application name shown by the wallet during connect
    pub app_name: String,

    /// Path of the application icon, resolved against the page origin
    pub icon_path: String,

    /// Where the wallet returns to after connect or sign-out
    pub redirect_to: String,

    /// Scopes requested from the wallet library
    pub scopes: Vec<Scope>,

    /// Scroll offset (pixels) at which the navbar turns solid
    pub scroll_threshold_px: f64,

    /// Background video on the home hero
    pub hero_video: String,

    /// Log level for the browser console
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            app_name: "Stacks Nexus".to_string(),
            icon_path: "/logo192.png".to_string(),
            redirect_to: "/".to_string(),
            scopes: vec![Scope::StoreWrite, Scope::PublishData],
            scroll_threshold_px: 50.0,
            hero_video: "/assets/background.mp4".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parses and validates a JSON config document.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a JSON config document, falling back to defaults when it is
    /// malformed.
    pub fn load_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Falling back to default site config: {}", e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.scroll_threshold_px.is_finite() || self.scroll_threshold_px < 0.0 {
            return Err(ConfigError::Invalid {
                field: "scroll_threshold_px",
                reason: format!("expected a non-negative number, got {}", self.scroll_threshold_px),
            });
        }
        if !self.redirect_to.starts_with('/') {
            return Err(ConfigError::Invalid {
                field: "redirect_to",
                reason: format!("expected an absolute path, got {:?}", self.redirect_to),
            });
        }
        Ok(())
    }

    /// Absolute icon URL for the given page origin.
    pub fn icon_url(&self, origin: &str) -> String {
        format!("{}{}", origin.trim_end_matches('/'), self.icon_path)
    }

    /// Parsed log level, defaulting to INFO for unknown names.
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}
