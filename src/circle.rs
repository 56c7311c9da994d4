use geo::{Coordinate, GeoFloat, Line};

use crate::{line::closest_point_on_line, utils::distance_squared};

/// A circle given by its center and a non-negative radius.
///
/// A circle with radius zero contains no point, not even its center,
/// since all the circle predicates use a strict comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle<T: GeoFloat> {
    pub center: Coordinate<T>,
    pub radius: T,
}

impl<T: GeoFloat> Circle<T> {
    /// Panics if the radius is negative, `NaN` or infinite.
    pub fn new<C: Into<Coordinate<T>>>(center: C, radius: T) -> Self {
        assert!(radius.is_finite(), "circle requires a finite radius");
        assert!(radius >= T::zero(), "circle requires a non-negative radius");
        Circle {
            center: center.into(),
            radius,
        }
    }

    #[inline]
    pub fn intersects_circle(&self, other: &Circle<T>) -> bool {
        circle_to_circle(self.center, self.radius, other.center, other.radius)
    }

    #[inline]
    pub fn intersects_line(&self, line: Line<T>) -> bool {
        circle_to_line(self.center, self.radius, line)
    }

    #[inline]
    pub fn contains_point(&self, point: Coordinate<T>) -> bool {
        circle_to_point(self.center, self.radius, point)
    }
}

/// Checks if two circles overlap. Touching circles do not.
pub fn circle_to_circle<T: GeoFloat>(
    center1: Coordinate<T>,
    radius1: T,
    center2: Coordinate<T>,
    radius2: T,
) -> bool {
    let radii = radius1 + radius2;
    distance_squared(center1, center2) < radii * radii
}

/// Checks if the segment passes strictly inside the circle.
pub fn circle_to_line<T: GeoFloat>(center: Coordinate<T>, radius: T, line: Line<T>) -> bool {
    let closest = closest_point_on_line(line, center);
    distance_squared(center, closest) < radius * radius
}

/// Checks if the point lies strictly inside the circle.
pub fn circle_to_point<T: GeoFloat>(
    center: Coordinate<T>,
    radius: T,
    point: Coordinate<T>,
) -> bool {
    distance_squared(center, point) < radius * radius
}
