//! Primitive identity and drawable primitives.
//!
//! A [`PrimitiveId`] is the stable key that correlates a geometric
//! [`Primitive`] from the layout engine with its start delay in the
//! animation timeline. Both sides index shells and electrons identically,
//! so zipping them by key is exact.

use std::fmt;

use crate::{draw::RenderLayer, geometry::Point};

/// Stable identity of one drawable unit in a Bohr diagram.
///
/// The derived ordering is not the draw order; draw order is defined by
/// [`DiagramGeometry::primitives`](crate::layout::DiagramGeometry::primitives)
/// and [`AnimationTimeline::iter`](crate::timeline::AnimationTimeline::iter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveId {
    /// The nucleus disc together with its symbol and atomic-number text.
    Nucleus,
    /// Shell ring `i`, innermost first.
    Shell(usize),
    /// Electron `index` on shell `shell`.
    Electron { shell: usize, index: usize },
    /// The element name below the diagram.
    NameLabel,
    /// The shell summary line below the name.
    SummaryLabel,
}

impl PrimitiveId {
    /// Render layer the primitive is drawn on.
    pub fn layer(self) -> RenderLayer {
        match self {
            Self::Shell(_) => RenderLayer::Shell,
            Self::Electron { .. } => RenderLayer::Electron,
            Self::Nucleus => RenderLayer::Nucleus,
            Self::NameLabel | Self::SummaryLabel => RenderLayer::Text,
        }
    }
}

impl fmt::Display for PrimitiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nucleus => write!(f, "nucleus"),
            Self::Shell(i) => write!(f, "shell[{i}]"),
            Self::Electron { shell, index } => write!(f, "electron[{shell}][{index}]"),
            Self::NameLabel => write!(f, "name-label"),
            Self::SummaryLabel => write!(f, "summary-label"),
        }
    }
}

/// Anchor point and font size for a centered text label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextAnchor {
    position: Point,
    font_size: f32,
}

impl TextAnchor {
    pub fn new(position: Point, font_size: f32) -> Self {
        Self {
            position,
            font_size,
        }
    }

    /// Center point of the text.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }
}

/// A resolved geometric primitive in diagram coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Filled nucleus disc with the symbol centered in it and the
    /// atomic-number sub-label below the symbol.
    Nucleus {
        center: Point,
        radius: f32,
        symbol: TextAnchor,
        atomic_number: TextAnchor,
    },
    /// Unfilled shell ring.
    Shell { center: Point, radius: f32 },
    /// Filled electron marker.
    Electron { center: Point, radius: f32 },
    /// Free-standing text label.
    Label(TextAnchor),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_id_display() {
        assert_eq!(PrimitiveId::Nucleus.to_string(), "nucleus");
        assert_eq!(PrimitiveId::Shell(2).to_string(), "shell[2]");
        assert_eq!(
            PrimitiveId::Electron { shell: 1, index: 7 }.to_string(),
            "electron[1][7]"
        );
        assert_eq!(PrimitiveId::NameLabel.to_string(), "name-label");
        assert_eq!(PrimitiveId::SummaryLabel.to_string(), "summary-label");
    }

    #[test]
    fn test_primitive_id_layer() {
        assert_eq!(PrimitiveId::Shell(0).layer(), RenderLayer::Shell);
        assert_eq!(
            PrimitiveId::Electron { shell: 0, index: 0 }.layer(),
            RenderLayer::Electron
        );
        assert_eq!(PrimitiveId::Nucleus.layer(), RenderLayer::Nucleus);
        assert_eq!(PrimitiveId::NameLabel.layer(), RenderLayer::Text);
        assert_eq!(PrimitiveId::SummaryLabel.layer(), RenderLayer::Text);
    }
}
