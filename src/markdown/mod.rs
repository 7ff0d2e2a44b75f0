//! Markdown styles and syntax
//!
//! This module provides the style model and both conversion directions:
//! - Style combinations and their valid set
//! - Presentation attributes per style
//! - Styled runs to markdown syntax (serializer)
//! - Markdown syntax to styled runs (deserializer)

mod flags;
mod style;
mod registry;
mod syntax;
mod rules;
mod serializer;
mod deserializer;

pub use flags::Markdown;
pub use style::{Attributes, Color, Font, FontFamily, Weight};
pub use registry::StyleRegistry;
pub use syntax::{default_pattern, syntax_for, Syntax};
pub use rules::{DelimitedMatch, Matcher};
pub use serializer::{serialize, serialize_runs};
pub use deserializer::SyntaxDeserializer;
