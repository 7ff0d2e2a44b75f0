//! Style registry
//!
//! Maps each valid [`Markdown`] combination to the [`Attributes`] the host
//! applies, and back. One registry is built per editing session and passed
//! by reference to whatever needs it.

use tracing::debug;

use super::flags::Markdown;
use super::style::{Attributes, Color, Font, Weight};
use crate::config::Config;
use crate::error::Result;

/// Attribute bundles for every valid style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRegistry {
    pub default_attributes: Attributes,
    pub header1_attributes: Attributes,
    pub header2_attributes: Attributes,
    pub header3_attributes: Attributes,
    pub bold_attributes: Attributes,
    pub italic_attributes: Attributes,
    pub bold_italic_attributes: Attributes,
    pub code_attributes: Attributes,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        let size = Font::DEFAULT_SIZE;
        Self {
            default_attributes: Attributes::new(Markdown::NONE, Font::system(size)),
            header1_attributes: Attributes::new(
                Markdown::HEADER1,
                Font::system(24).with_weight(Weight::Bold),
            ),
            header2_attributes: Attributes::new(
                Markdown::HEADER2,
                Font::system(20).with_weight(Weight::Bold),
            ),
            header3_attributes: Attributes::new(
                Markdown::HEADER3,
                Font::system(18).with_weight(Weight::Semibold),
            ),
            bold_attributes: Attributes::new(
                Markdown::BOLD,
                Font::system(size).with_weight(Weight::Bold),
            ),
            italic_attributes: Attributes::new(Markdown::ITALIC, Font::system(size).with_italic()),
            bold_italic_attributes: Attributes::new(
                Markdown::BOLD_ITALIC,
                Font::system(size).with_weight(Weight::Bold).with_italic(),
            ),
            code_attributes: Attributes::new(Markdown::CODE, Font::monospace(size))
                .with_color(Color::Accent),
        }
    }
}

impl StyleRegistry {
    /// Build the built-in registry with the config's style overrides applied
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut registry = Self::default();
        for markdown in Markdown::VALID_VALUES {
            if let Some(over) = config.style(markdown) {
                debug!(style = %markdown, "applying style override");
                // Exact valid values always resolve to a slot
                if let Some(slot) = registry.slot_mut(markdown) {
                    over.apply(slot)?;
                }
            }
        }
        Ok(registry)
    }

    /// Returns the attributes for the given style.
    ///
    /// Anything other than an exact valid combination gets the default bundle.
    pub fn attributes_for(&self, markdown: Markdown) -> &Attributes {
        match markdown {
            Markdown::HEADER1 => &self.header1_attributes,
            Markdown::HEADER2 => &self.header2_attributes,
            Markdown::HEADER3 => &self.header3_attributes,
            Markdown::BOLD => &self.bold_attributes,
            Markdown::ITALIC => &self.italic_attributes,
            Markdown::BOLD_ITALIC => &self.bold_italic_attributes,
            Markdown::CODE => &self.code_attributes,
            _ => &self.default_attributes,
        }
    }

    /// Returns the style the given attributes were tagged with, or `NONE`
    /// if they carry no recognizable discriminator.
    pub fn style_for(&self, attributes: &Attributes) -> Markdown {
        match attributes.markdown {
            Some(markdown) if markdown.is_valid() => markdown,
            _ => Markdown::NONE,
        }
    }

    fn slot_mut(&mut self, markdown: Markdown) -> Option<&mut Attributes> {
        let slot = match markdown {
            Markdown::NONE => &mut self.default_attributes,
            Markdown::HEADER1 => &mut self.header1_attributes,
            Markdown::HEADER2 => &mut self.header2_attributes,
            Markdown::HEADER3 => &mut self.header3_attributes,
            Markdown::BOLD => &mut self.bold_attributes,
            Markdown::ITALIC => &mut self.italic_attributes,
            Markdown::BOLD_ITALIC => &mut self.bold_italic_attributes,
            Markdown::CODE => &mut self.code_attributes,
            _ => return None,
        };
        Some(slot)
    }
}
