//! Configuration file support
//!
//! Loads style and pattern overrides from ~/.mdtoggle.toml
//! (or %USERPROFILE%\.mdtoggle.toml on Windows).
//!
//! Example:
//! ```text
//! # mdtoggle configuration
//! [styles.header1]
//! size = 24
//! weight = "bold"
//! color = "bright-white"
//!
//! [styles.code]
//! family = "monospace"
//! color = "accent"
//!
//! [patterns]
//! italic = '(?s)(_)(.+?)(_)'
//! ```
//!
//! Style keys are the style names (`none`, `header1`, `header2`, `header3`,
//! `bold`, `italic`, `bold-italic`, `code`). Pattern keys are the atomic
//! style names.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{MarkdownError, Result};
use crate::markdown::{Attributes, Color, FontFamily, Markdown, Weight};

const MIN_FONT_SIZE: u16 = 6;
const MAX_FONT_SIZE: u16 = 96;

/// Configuration settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Attribute overrides keyed by style name
    pub styles: BTreeMap<String, StyleOverride>,
    /// Replacement delimiter patterns keyed by style name
    pub patterns: BTreeMap<String, String>,
}

/// Partial attribute bundle; unset fields keep the built-in value
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverride {
    pub family: Option<FontFamily>,
    pub size: Option<u16>,
    pub weight: Option<Weight>,
    pub italic: Option<bool>,
    pub color: Option<String>,
}

impl StyleOverride {
    /// Apply the set fields onto `attributes`
    pub fn apply(&self, attributes: &mut Attributes) -> Result<()> {
        if let Some(family) = self.family {
            attributes.font.family = family;
        }
        if let Some(size) = self.size {
            attributes.font.size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        }
        if let Some(weight) = self.weight {
            attributes.font.weight = weight;
        }
        if let Some(italic) = self.italic {
            attributes.font.italic = italic;
        }
        if let Some(name) = &self.color {
            attributes.color =
                Color::from_name(name).ok_or_else(|| MarkdownError::UnknownColor(name.clone()))?;
        }
        Ok(())
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".mdtoggle.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".mdtoggle.toml"))
        }
    }

    /// Load configuration from the default path. A missing file yields defaults.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load configuration, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!(error = %e, "ignoring unreadable config");
            Config::default()
        })
    }

    /// Load configuration from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                debug!(path = %path.display(), "loading config");
                Self::parse(&contents)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject keys that do not name a style
    fn validate(&self) -> Result<()> {
        for name in self.styles.keys() {
            Markdown::from_name(name).ok_or_else(|| MarkdownError::UnknownStyle(name.clone()))?;
        }
        for name in self.patterns.keys() {
            match Markdown::from_name(name) {
                Some(m) if Markdown::ATOMIC_VALUES.contains(&m) => {}
                _ => return Err(MarkdownError::UnknownStyle(name.clone())),
            }
        }
        Ok(())
    }

    /// Override for a style, if configured
    pub fn style(&self, markdown: Markdown) -> Option<&StyleOverride> {
        markdown.name().and_then(|name| self.styles.get(name))
    }

    /// Replacement pattern for an atomic style, if configured
    pub fn pattern(&self, markdown: Markdown) -> Option<&str> {
        markdown
            .name()
            .and_then(|name| self.patterns.get(name))
            .map(|s| s.as_str())
    }
}
