//! Markdown style combinations
//!
//! A [`Markdown`] value is a small bit-set of style categories. Each atomic
//! category owns one bit; `NONE` is the empty set. Only a fixed handful of
//! combinations are valid styles for a run of text, see [`Markdown::VALID_VALUES`].

use std::fmt;
use std::ops::{BitOr, BitOrAssign, Sub, SubAssign};

/// A set of markdown style categories
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Markdown(u8);

impl Markdown {
    /// The empty combination (plain text)
    pub const NONE: Markdown = Markdown(0);
    pub const HEADER1: Markdown = Markdown(1 << 0);
    pub const HEADER2: Markdown = Markdown(1 << 1);
    pub const HEADER3: Markdown = Markdown(1 << 2);
    pub const BOLD: Markdown = Markdown(1 << 3);
    pub const ITALIC: Markdown = Markdown(1 << 4);
    pub const CODE: Markdown = Markdown(1 << 5);

    /// The only composite style
    pub const BOLD_ITALIC: Markdown = Markdown(Self::BOLD.0 | Self::ITALIC.0);

    /// Single-category values, in toolbar order
    pub const ATOMIC_VALUES: [Markdown; 6] = [
        Self::HEADER1,
        Self::HEADER2,
        Self::HEADER3,
        Self::BOLD,
        Self::ITALIC,
        Self::CODE,
    ];

    pub const COMBINED_VALUES: [Markdown; 1] = [Self::BOLD_ITALIC];

    /// Every combination that may be assigned to a run of text
    pub const VALID_VALUES: [Markdown; 8] = [
        Self::NONE,
        Self::HEADER1,
        Self::HEADER2,
        Self::HEADER3,
        Self::BOLD,
        Self::ITALIC,
        Self::CODE,
        Self::BOLD_ITALIC,
    ];

    const HEADERS: u8 = Self::HEADER1.0 | Self::HEADER2.0 | Self::HEADER3.0;

    /// Build from raw bits. Any bit pattern is accepted; use [`is_valid`](Self::is_valid) to check.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Bits set in either value
    pub const fn union(self, other: Markdown) -> Markdown {
        Markdown(self.0 | other.0)
    }

    /// Bits in `self` that are not in `other`
    pub const fn subtract(self, other: Markdown) -> Markdown {
        Markdown(self.0 & !other.0)
    }

    /// True if the two values have no bits in common
    pub const fn is_disjoint(self, other: Markdown) -> bool {
        self.0 & other.0 == 0
    }

    /// True if every bit of `other` is set in `self`
    pub const fn contains(self, other: Markdown) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check membership in the fixed set of valid combinations
    pub fn is_valid(self) -> bool {
        Self::VALID_VALUES.contains(&self)
    }

    /// Check if this is exactly one of the header levels
    pub fn is_header(self) -> bool {
        self.0 != 0 && self.0 & !Self::HEADERS == 0 && self.0.count_ones() == 1
    }

    /// Iterate the atomic categories set in this value
    pub fn atoms(self) -> impl Iterator<Item = Markdown> {
        Self::ATOMIC_VALUES
            .into_iter()
            .filter(move |atom| self.contains(*atom))
    }

    /// Configuration name of a valid combination
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::NONE => "none",
            Self::HEADER1 => "header1",
            Self::HEADER2 => "header2",
            Self::HEADER3 => "header3",
            Self::BOLD => "bold",
            Self::ITALIC => "italic",
            Self::BOLD_ITALIC => "bold-italic",
            Self::CODE => "code",
            _ => return None,
        };
        Some(name)
    }

    /// Parse a valid combination from its configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::VALID_VALUES
            .into_iter()
            .find(|value| value.name() == Some(name))
    }
}

impl BitOr for Markdown {
    type Output = Markdown;

    fn bitor(self, rhs: Markdown) -> Markdown {
        self.union(rhs)
    }
}

impl BitOrAssign for Markdown {
    fn bitor_assign(&mut self, rhs: Markdown) {
        *self = self.union(rhs);
    }
}

impl Sub for Markdown {
    type Output = Markdown;

    fn sub(self, rhs: Markdown) -> Markdown {
        self.subtract(rhs)
    }
}

impl SubAssign for Markdown {
    fn sub_assign(&mut self, rhs: Markdown) {
        *self = self.subtract(rhs);
    }
}

impl fmt::Debug for Markdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Markdown({})", name),
            None => write!(f, "Markdown({:#08b})", self.0),
        }
    }
}

impl fmt::Display for Markdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => {
                let names: Vec<_> = self.atoms().filter_map(|atom| atom.name()).collect();
                f.write_str(&names.join("+"))
            }
        }
    }
}
