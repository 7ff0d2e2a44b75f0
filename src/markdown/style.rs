//! Presentation attributes for styled text
//!
//! An [`Attributes`] bundle is what the host editing surface applies to a
//! range of text (or uses as typing attributes). It carries the [`Markdown`]
//! discriminator so the style of existing text can be recovered later.

use serde::Deserialize;

use super::flags::Markdown;

/// Theme color references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// The theme's regular text foreground
    #[default]
    Foreground,
    /// The theme's accent color
    Accent,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Parse a color from its configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name {
            "foreground" => Color::Foreground,
            "accent" => Color::Accent,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "bright-black" => Color::BrightBlack,
            "bright-red" => Color::BrightRed,
            "bright-green" => Color::BrightGreen,
            "bright-yellow" => Color::BrightYellow,
            "bright-blue" => Color::BrightBlue,
            "bright-magenta" => Color::BrightMagenta,
            "bright-cyan" => Color::BrightCyan,
            "bright-white" => Color::BrightWhite,
            _ => return None,
        };
        Some(color)
    }
}

/// Font family selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    /// The platform's proportional UI font
    #[default]
    System,
    /// A fixed-width font for code
    Monospace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Weight {
    #[default]
    Regular,
    Semibold,
    Bold,
}

/// Font description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Font {
    pub family: FontFamily,
    /// Size in points
    pub size: u16,
    pub weight: Weight,
    pub italic: bool,
}

impl Font {
    pub const DEFAULT_SIZE: u16 = 16;

    /// Regular system font of the given size
    pub fn system(size: u16) -> Self {
        Self {
            family: FontFamily::System,
            size,
            weight: Weight::Regular,
            italic: false,
        }
    }

    /// Regular monospace font of the given size
    pub fn monospace(size: u16) -> Self {
        Self {
            family: FontFamily::Monospace,
            ..Self::system(size)
        }
    }

    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(Self::DEFAULT_SIZE)
    }
}

/// Text attribute bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Attributes {
    /// Discriminator identifying the style these attributes render
    pub markdown: Option<Markdown>,
    pub font: Font,
    /// Foreground color
    pub color: Color,
}

impl Attributes {
    /// Create attributes tagged with a style
    pub fn new(markdown: Markdown, font: Font) -> Self {
        Self {
            markdown: Some(markdown),
            font,
            color: Color::default(),
        }
    }

    /// Builder: set foreground color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Builder: set font
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Builder: drop the discriminator
    pub fn untagged(mut self) -> Self {
        self.markdown = None;
        self
    }
}
