//! Error types for mdtoggle

use thiserror::Error;

/// Result type alias for mdtoggle operations
pub type Result<T> = std::result::Result<T, MarkdownError>;

/// Errors raised while configuring the engine.
///
/// Document operations (serialize, deserialize, toggling) never fail; only
/// building a registry or a deserializer from configuration can.
#[derive(Error, Debug)]
pub enum MarkdownError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid pattern for {name}: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    #[error("Unknown color: {0}")]
    UnknownColor(String),
}
