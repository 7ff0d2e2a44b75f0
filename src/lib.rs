//! mdtoggle - markdown toggling engine for rich-text editors
//!
//! Keeps styled text and its plain markdown syntax in sync:
//! - [`serialize`] turns styled runs into markdown syntax
//! - [`SyntaxDeserializer`] turns markdown syntax back into styled runs
//! - [`ActiveStyleTracker`] tracks which style newly typed text gets
//!
//! Supported styles are three header levels, bold, italic, bold+italic and
//! inline code.

pub mod config;
pub mod error;
pub mod markdown;
pub mod text;
pub mod tracker;

pub use config::Config;
pub use error::{MarkdownError, Result};
pub use markdown::{
    serialize, serialize_runs, Attributes, Markdown, StyleRegistry, SyntaxDeserializer,
};
pub use text::{coalesce, StyledRun, StyledText};
pub use tracker::{ActiveStyleTracker, ButtonState, StyleChange};
