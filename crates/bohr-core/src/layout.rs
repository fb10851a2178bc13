//! Layout engine for Bohr diagrams.
//!
//! [`layout`] maps an [`ElementData`] to a [`DiagramGeometry`]: the nucleus,
//! one ring per shell, the electron markers on each ring and the text
//! anchors. All coordinates live on a square canvas of
//! [`LayoutOptions::canvas_size`] units; the name and shell-summary labels
//! hang below the canvas, so the full drawing extent is taller than wide
//! (see [`DiagramGeometry::extent`]).
//!
//! # Algorithm
//!
//! ```text
//! center         = canvas_size / 2
//! nucleus_radius = max(min_nucleus_radius, atomic_number / nucleus_scale_factor)
//! shell_spacing  = (center - nucleus_radius - margin) / max(1, shell_count)
//! shell_radii[i] = nucleus_radius + shell_spacing * (i + 1)
//! electron j/n   = center + shell_radii[i] * (cos θ, sin θ),  θ = 2π·j/n
//! ```
//!
//! The radius and spacing scale with the element itself, so hydrogen and
//! oganesson come out proportionate with the same constants.
//!
//! # Example
//!
//! ```
//! use bohr_core::{element::ElementData, layout::{layout, LayoutOptions}};
//!
//! let sodium = ElementData::new(11, "Na", "Sodium", vec![2, 8, 1]);
//! let geometry = layout(&sodium, &LayoutOptions::default());
//!
//! assert_eq!(geometry.shell_radii().len(), 3);
//! assert_eq!(geometry.electron_positions()[1].len(), 8);
//! ```

use std::f32::consts::TAU;

use log::{debug, trace};
use serde::Deserialize;

use crate::{
    element::ElementData,
    geometry::{Point, Size},
    primitive::{Primitive, PrimitiveId, TextAnchor},
};

const SYMBOL_MIN_FONT_SIZE: f32 = 16.0;
const ATOMIC_NUMBER_MIN_FONT_SIZE: f32 = 10.0;
const ATOMIC_NUMBER_FONT_DIVISOR: f32 = 3.5;
/// Gap between the symbol baseline region and the atomic-number sub-label.
const ATOMIC_NUMBER_OFFSET: f32 = 8.0;

const NAME_LABEL_GAP: f32 = 32.0;
const NAME_FONT_SIZE: f32 = 30.0;
const SUMMARY_LABEL_GAP: f32 = 28.0;
const SUMMARY_FONT_SIZE: f32 = 16.0;

/// Layout constants supplied by the rendering side.
///
/// # Examples
///
/// ```
/// # use bohr_core::layout::LayoutOptions;
/// let options = LayoutOptions::default().with_canvas_size(800.0);
/// assert_eq!(options.canvas_size(), 800.0);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Side length of the square diagram canvas.
    canvas_size: f32,
    /// Radius of each electron marker.
    electron_marker_radius: f32,
    /// Smallest nucleus radius; keeps the symbol readable for light elements.
    min_nucleus_radius: f32,
    /// Atomic number divided by this factor gives the unclamped nucleus radius.
    nucleus_scale_factor: f32,
    /// Space kept free between the outermost shell and the canvas edge.
    margin: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            canvas_size: 500.0,
            electron_marker_radius: 5.0,
            min_nucleus_radius: 30.0,
            nucleus_scale_factor: 3.5,
            margin: 20.0,
        }
    }
}

impl LayoutOptions {
    pub fn with_canvas_size(mut self, canvas_size: f32) -> Self {
        self.canvas_size = canvas_size;
        self
    }

    pub fn with_electron_marker_radius(mut self, radius: f32) -> Self {
        self.electron_marker_radius = radius;
        self
    }

    pub fn with_min_nucleus_radius(mut self, radius: f32) -> Self {
        self.min_nucleus_radius = radius;
        self
    }

    pub fn with_nucleus_scale_factor(mut self, factor: f32) -> Self {
        self.nucleus_scale_factor = factor;
        self
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn canvas_size(&self) -> f32 {
        self.canvas_size
    }

    pub fn electron_marker_radius(&self) -> f32 {
        self.electron_marker_radius
    }

    pub fn min_nucleus_radius(&self) -> f32 {
        self.min_nucleus_radius
    }

    pub fn nucleus_scale_factor(&self) -> f32 {
        self.nucleus_scale_factor
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Checks that every option is usable by [`layout`].
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending option when a value is
    /// non-finite or non-positive (`margin` may be zero), or when the canvas
    /// leaves no room for shells around the smallest nucleus.
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("canvas_size", self.canvas_size),
            ("electron_marker_radius", self.electron_marker_radius),
            ("min_nucleus_radius", self.min_nucleus_radius),
            ("nucleus_scale_factor", self.nucleus_scale_factor),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("`{name}` must be a positive number, got {value}"));
            }
        }

        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(format!(
                "`margin` must be a non-negative number, got {}",
                self.margin
            ));
        }

        if self.canvas_size / 2.0 <= self.min_nucleus_radius + self.margin {
            return Err(format!(
                "`canvas_size` {} leaves no room for shells around a nucleus of radius {} with margin {}",
                self.canvas_size, self.min_nucleus_radius, self.margin
            ));
        }

        Ok(())
    }

    /// Checks that the nucleus of `atomic_number` leaves room for shells.
    ///
    /// [`validate`](Self::validate) only covers the smallest nucleus; a small
    /// `nucleus_scale_factor` can still grow a heavy element's nucleus past
    /// the margin, which would put its rings inside the nucleus.
    ///
    /// # Errors
    ///
    /// Returns a message when `nucleus_radius + margin` reaches the canvas
    /// half-width.
    pub fn validate_for(&self, atomic_number: u32) -> Result<(), String> {
        let radius = nucleus_radius(atomic_number, self);
        if self.canvas_size / 2.0 <= radius + self.margin {
            return Err(format!(
                "`canvas_size` {} leaves no room for shells around a nucleus of radius {radius} \
                 (atomic number {atomic_number}) with margin {}",
                self.canvas_size, self.margin
            ));
        }
        Ok(())
    }
}

/// Anchor points of the four text labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Labels {
    symbol: TextAnchor,
    atomic_number: TextAnchor,
    name: TextAnchor,
    shell_summary: TextAnchor,
}

impl Labels {
    /// Element symbol, centered in the nucleus.
    pub fn symbol(&self) -> TextAnchor {
        self.symbol
    }

    /// Atomic-number sub-label, inside the nucleus below the symbol.
    pub fn atomic_number(&self) -> TextAnchor {
        self.atomic_number
    }

    /// Element name, below the canvas.
    pub fn name(&self) -> TextAnchor {
        self.name
    }

    /// Shell summary, below the name.
    pub fn shell_summary(&self) -> TextAnchor {
        self.shell_summary
    }
}

/// Every geometric primitive of one element's diagram.
///
/// Produced by [`layout`]; never mutated. Shell and electron vectors are
/// indexed exactly like [`ElementData::shells`].
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramGeometry {
    canvas_size: f32,
    nucleus_center: Point,
    nucleus_radius: f32,
    shell_radii: Vec<f32>,
    electron_positions: Vec<Vec<Point>>,
    electron_radius: f32,
    labels: Labels,
}

impl DiagramGeometry {
    pub fn canvas_size(&self) -> f32 {
        self.canvas_size
    }

    pub fn nucleus_center(&self) -> Point {
        self.nucleus_center
    }

    pub fn nucleus_radius(&self) -> f32 {
        self.nucleus_radius
    }

    /// Ring radii, innermost first, strictly increasing.
    pub fn shell_radii(&self) -> &[f32] {
        &self.shell_radii
    }

    /// Electron centers per shell.
    pub fn electron_positions(&self) -> &[Vec<Point>] {
        &self.electron_positions
    }

    /// Radius of each electron marker.
    pub fn electron_radius(&self) -> f32 {
        self.electron_radius
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Size of the area covering the canvas and the labels hanging below it.
    pub fn extent(&self) -> Size {
        let bottom = self.labels.shell_summary.position().y() + SUMMARY_FONT_SIZE;
        Size::square(self.canvas_size).max(Size::new(self.canvas_size, bottom))
    }

    /// Enumerates every primitive with its identity, in draw order:
    /// nucleus, then each shell followed by its electrons, then the labels.
    pub fn primitives(&self) -> Vec<(PrimitiveId, Primitive)> {
        let electron_total: usize = self.electron_positions.iter().map(Vec::len).sum();
        let mut primitives = Vec::with_capacity(3 + self.shell_radii.len() + electron_total);

        primitives.push((
            PrimitiveId::Nucleus,
            Primitive::Nucleus {
                center: self.nucleus_center,
                radius: self.nucleus_radius,
                symbol: self.labels.symbol,
                atomic_number: self.labels.atomic_number,
            },
        ));

        for (shell, (&radius, electrons)) in self
            .shell_radii
            .iter()
            .zip(&self.electron_positions)
            .enumerate()
        {
            primitives.push((
                PrimitiveId::Shell(shell),
                Primitive::Shell {
                    center: self.nucleus_center,
                    radius,
                },
            ));
            primitives.extend(electrons.iter().enumerate().map(|(index, &center)| {
                (
                    PrimitiveId::Electron { shell, index },
                    Primitive::Electron {
                        center,
                        radius: self.electron_radius,
                    },
                )
            }));
        }

        primitives.push((PrimitiveId::NameLabel, Primitive::Label(self.labels.name)));
        primitives.push((
            PrimitiveId::SummaryLabel,
            Primitive::Label(self.labels.shell_summary),
        ));

        primitives
    }
}

/// Radius of the nucleus disc for the given atomic number.
///
/// Grows linearly with the atomic number and never drops below
/// [`LayoutOptions::min_nucleus_radius`].
pub fn nucleus_radius(atomic_number: u32, options: &LayoutOptions) -> f32 {
    options
        .min_nucleus_radius
        .max(atomic_number as f32 / options.nucleus_scale_factor)
}

/// Computes the diagram geometry for one element.
///
/// Pure and total: the same input always yields bit-identical output, and
/// degenerate input (no shells, atomic number zero) produces a diagram with
/// no rings or electrons instead of failing. `options` is assumed to pass
/// [`LayoutOptions::validate`].
pub fn layout(element: &ElementData, options: &LayoutOptions) -> DiagramGeometry {
    let half = options.canvas_size / 2.0;
    let center = Point::new(half, half);
    let nucleus_radius = nucleus_radius(element.atomic_number(), options);

    // max(1, ..) keeps an element without shells from dividing by zero
    let divisor = element.shell_count().max(1) as f32;
    let shell_spacing = (half - nucleus_radius - options.margin) / divisor;

    debug!(
        atomic_number = element.atomic_number(),
        shell_count = element.shell_count(),
        nucleus_radius,
        shell_spacing;
        "Computing diagram layout"
    );

    let shell_radii: Vec<f32> = (0..element.shell_count())
        .map(|i| nucleus_radius + shell_spacing * (i + 1) as f32)
        .collect();

    let electron_positions: Vec<Vec<Point>> = element
        .shells()
        .iter()
        .zip(&shell_radii)
        .map(|(&count, &radius)| electron_ring(center, radius, count))
        .collect();

    let labels = place_labels(center, nucleus_radius, options.canvas_size);

    let geometry = DiagramGeometry {
        canvas_size: options.canvas_size,
        nucleus_center: center,
        nucleus_radius,
        shell_radii,
        electron_positions,
        electron_radius: options.electron_marker_radius,
        labels,
    };

    trace!(geometry:?; "Diagram layout computed");

    geometry
}

/// Places `count` electrons evenly around a ring, the first on the +X axis.
fn electron_ring(center: Point, radius: f32, count: u32) -> Vec<Point> {
    (0..count)
        .map(|j| {
            let angle = TAU * j as f32 / count as f32;
            Point::on_circle(center, radius, angle)
        })
        .collect()
}

fn place_labels(center: Point, nucleus_radius: f32, canvas_size: f32) -> Labels {
    let symbol_font = SYMBOL_MIN_FONT_SIZE.max(nucleus_radius / 2.0);
    let atomic_number_font =
        ATOMIC_NUMBER_MIN_FONT_SIZE.max(nucleus_radius / ATOMIC_NUMBER_FONT_DIVISOR);

    let atomic_number_y = center.y() + nucleus_radius * 0.5 + ATOMIC_NUMBER_OFFSET;
    let name_y = canvas_size + NAME_LABEL_GAP;
    let summary_y = name_y + SUMMARY_LABEL_GAP;

    Labels {
        symbol: TextAnchor::new(center, symbol_font),
        atomic_number: TextAnchor::new(center.with_y(atomic_number_y), atomic_number_font),
        name: TextAnchor::new(center.with_y(name_y), NAME_FONT_SIZE),
        shell_summary: TextAnchor::new(center.with_y(summary_y), SUMMARY_FONT_SIZE),
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn element_strategy() -> impl Strategy<Value = ElementData> {
        (0u32..=150, prop::collection::vec(0u32..=32, 0..=7))
            .prop_map(|(z, shells)| ElementData::new(z, "X", "Element", shells))
    }

    fn options_strategy() -> impl Strategy<Value = LayoutOptions> {
        (300.0f32..1200.0, 1.0f32..10.0, 0.0f32..40.0).prop_map(|(canvas, electron, margin)| {
            LayoutOptions::default()
                .with_canvas_size(canvas)
                .with_electron_marker_radius(electron)
                .with_margin(margin)
        })
    }

    /// Shell radii increase strictly and all lie outside the nucleus.
    fn check_shell_radii_increase(
        element: &ElementData,
        options: &LayoutOptions,
    ) -> Result<(), TestCaseError> {
        let geometry = layout(element, options);
        let radii = geometry.shell_radii();

        prop_assert_eq!(radii.len(), element.shell_count());
        for radius in radii {
            prop_assert!(*radius > geometry.nucleus_radius());
        }
        for pair in radii.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        Ok(())
    }

    /// Each shell holds exactly its electron count, evenly spaced on its ring.
    fn check_electrons_on_rings(
        element: &ElementData,
        options: &LayoutOptions,
    ) -> Result<(), TestCaseError> {
        let geometry = layout(element, options);
        let center = geometry.nucleus_center();

        prop_assert_eq!(geometry.electron_positions().len(), element.shell_count());
        for (i, electrons) in geometry.electron_positions().iter().enumerate() {
            let count = element.shells()[i] as usize;
            prop_assert_eq!(electrons.len(), count);

            let radius = geometry.shell_radii()[i];
            for (j, electron) in electrons.iter().enumerate() {
                prop_assert!(approx_eq!(
                    f32,
                    electron.distance_to(center),
                    radius,
                    epsilon = 1e-2
                ));

                let expected = std::f32::consts::TAU * j as f32 / count as f32;
                let actual = electron.angle_from(center);
                let diff = (actual - expected).abs();
                let wrapped = diff.min(std::f32::consts::TAU - diff);
                prop_assert!(wrapped < 1e-3, "electron {j} of {count}: {actual} vs {expected}");
            }
        }
        Ok(())
    }

    /// Coordinates stay finite for every input, degenerate or not.
    fn check_all_finite(
        element: &ElementData,
        options: &LayoutOptions,
    ) -> Result<(), TestCaseError> {
        let geometry = layout(element, options);

        prop_assert!(geometry.nucleus_radius().is_finite());
        prop_assert!(geometry.shell_radii().iter().all(|r| r.is_finite()));
        prop_assert!(
            geometry
                .electron_positions()
                .iter()
                .flatten()
                .all(|p| p.is_finite())
        );
        Ok(())
    }

    /// Nucleus radius never shrinks as the atomic number grows, and never
    /// drops below the configured floor.
    fn check_nucleus_radius_monotonic(z1: u32, z2: u32) -> Result<(), TestCaseError> {
        let options = LayoutOptions::default();
        let (low, high) = (z1.min(z2), z1.max(z2));

        prop_assert!(nucleus_radius(low, &options) <= nucleus_radius(high, &options));
        prop_assert!(nucleus_radius(low, &options) >= options.min_nucleus_radius());
        Ok(())
    }

    fn check_layout_is_pure(
        element: &ElementData,
        options: &LayoutOptions,
    ) -> Result<(), TestCaseError> {
        prop_assert_eq!(layout(element, options), layout(element, options));
        Ok(())
    }

    proptest! {
        #[test]
        fn shell_radii_increase(element in element_strategy(), options in options_strategy()) {
            check_shell_radii_increase(&element, &options)?;
        }

        #[test]
        fn electrons_on_rings(element in element_strategy(), options in options_strategy()) {
            check_electrons_on_rings(&element, &options)?;
        }

        #[test]
        fn all_finite(element in element_strategy(), options in options_strategy()) {
            check_all_finite(&element, &options)?;
        }

        #[test]
        fn nucleus_radius_monotonic(z1 in 0u32..1000, z2 in 0u32..1000) {
            check_nucleus_radius_monotonic(z1, z2)?;
        }

        #[test]
        fn layout_is_pure(element in element_strategy(), options in options_strategy()) {
            check_layout_is_pure(&element, &options)?;
        }
    }
}
