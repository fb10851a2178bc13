//! Geometric primitives for diagram layout.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//!
//! # Coordinate System
//!
//! Diagram coordinates follow the SVG convention:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Angles are measured in radians from the +X axis. Because Y grows
//! downward, increasing angles sweep clockwise on screen.

/// A 2D point in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use bohr_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(13.0, 24.0);
///
/// assert_eq!(p2.sub_point(p1), Point::new(3.0, 4.0));
/// assert_eq!(p2.distance_to(p1), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the point at `radius` from `center` along `angle` (radians from +X).
    ///
    /// # Examples
    ///
    /// ```
    /// # use bohr_core::geometry::Point;
    /// let center = Point::new(100.0, 100.0);
    /// let p = Point::on_circle(center, 50.0, 0.0);
    /// assert_eq!(p, Point::new(150.0, 100.0));
    /// ```
    pub fn on_circle(center: Point, radius: f32, angle: f32) -> Self {
        Self {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f32 {
        self.sub_point(other).hypot()
    }

    /// Angle of the vector from `origin` to this point, in `[0, 2π)`.
    pub fn angle_from(self, origin: Point) -> f32 {
        let delta = self.sub_point(origin);
        delta.y.atan2(delta.x).rem_euclid(std::f32::consts::TAU)
    }

    /// Returns `true` when both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A square of the given side length.
    pub fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    /// A point placed on a circle lies at exactly `radius` from its center.
    fn check_on_circle_distance(
        center: Point,
        radius: f32,
        angle: f32,
    ) -> Result<(), TestCaseError> {
        let p = Point::on_circle(center, radius, angle);
        prop_assert!(approx_eq!(
            f32,
            p.distance_to(center),
            radius,
            epsilon = 0.01
        ));
        Ok(())
    }

    /// Distance is symmetric.
    fn check_distance_symmetric(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        prop_assert!(approx_eq!(
            f32,
            p1.distance_to(p2),
            p2.distance_to(p1),
            epsilon = 0.001
        ));
        Ok(())
    }

    proptest! {
        #[test]
        fn on_circle_distance(
            center in point_strategy(),
            radius in 0.0f32..500.0,
            angle in 0.0f32..std::f32::consts::TAU,
        ) {
            check_on_circle_distance(center, radius, angle)?;
        }

        #[test]
        fn distance_symmetric(p1 in point_strategy(), p2 in point_strategy()) {
            check_distance_symmetric(p1, p2)?;
        }
    }
}
