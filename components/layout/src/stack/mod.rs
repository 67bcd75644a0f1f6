//! Stack containers and their alignment vocabulary.
//!
//! Alignments are enums on the Rust side but cross the boundary as stable
//! integer keys, so the host's separately-versioned layout code can match
//! on them without sharing these type definitions.

mod hstack;
mod vstack;
mod zstack;

pub use hstack::{HStack, hstack};
pub use vstack::{VStack, vstack};
pub use zstack::{ZStack, zstack};

/// Vertical alignment of children within a horizontal stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlignment {
    /// Align tops.
    Top,
    /// Center vertically.
    #[default]
    Center,
    /// Align bottoms.
    Bottom,
}

impl VerticalAlignment {
    /// The stable integer key this alignment crosses the boundary as.
    #[must_use]
    pub const fn key(self) -> i64 {
        match self {
            Self::Top => 1,
            Self::Center => 2,
            Self::Bottom => 3,
        }
    }
}

/// Horizontal alignment of children within a vertical stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    /// Align leading edges.
    Leading,
    /// Center horizontally.
    #[default]
    Center,
    /// Align trailing edges.
    Trailing,
}

impl HorizontalAlignment {
    /// The stable integer key this alignment crosses the boundary as.
    #[must_use]
    pub const fn key(self) -> i64 {
        match self {
            Self::Leading => 1,
            Self::Center => 2,
            Self::Trailing => 3,
        }
    }
}

/// Two-axis alignment for depth stacks and frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    /// Horizontal component.
    pub horizontal: HorizontalAlignment,
    /// Vertical component.
    pub vertical: VerticalAlignment,
}

impl Alignment {
    /// Creates an alignment from its two components.
    #[must_use]
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Default spacing between stack children, in points.
pub const DEFAULT_SPACING: f64 = 10.0;
