use geo::{Coordinate, GeoFloat, Line};
use log::trace;

use crate::{
    bounds::Bounds,
    circle::{circle_to_line, circle_to_point, Circle},
    line::line_to_line,
    sector::{sector_of, Sector},
};

/// Checks if the rectangle contains the point.
///
/// The left and top edges are inside, the right and bottom edges are
/// outside.
pub fn rect_to_point<T, B>(bounds: B, point: Coordinate<T>) -> bool
where
    T: GeoFloat,
    B: Into<Bounds<T>>,
{
    let b = bounds.into();
    point.x >= b.left() && point.y >= b.top() && point.x < b.right() && point.y < b.bottom()
}

/// Checks if a circle overlaps the rectangle.
///
/// A circle containing the rectangle's center, or whose center lies
/// inside the rectangle, is accepted right away. Otherwise the circle
/// is tested only against the edges facing the sector of its center:
/// one edge for a side sector, two for a corner.
///
/// A center in [`Sector::CENTER`] faces no edge at all, so it must be
/// accepted explicitly: testing the implied edges alone reports a small
/// circle deep inside a large rectangle, away from its center, as
/// disjoint.
pub fn rect_to_circle<T, B>(bounds: B, center: Coordinate<T>, radius: T) -> bool
where
    T: GeoFloat,
    B: Into<Bounds<T>>,
{
    let b = bounds.into();
    if circle_to_point(center, radius, b.center()) {
        return true;
    }

    let sector = sector_of(b, center);
    trace!("circle center {:?} in sector {:?}", center, sector);
    if sector.is_center() {
        return true;
    }

    sector
        .edges()
        .any(|edge| circle_to_line(center, radius, b.edge(edge)))
}

/// Checks if a line segment overlaps the rectangle.
///
/// Applies the Cohen–Sutherland tests to the end point sectors: an end
/// point inside accepts, a common outside bit rejects, and otherwise
/// only the edges named in either sector are tested for a crossing.
pub fn rect_to_line<T, B>(bounds: B, line: Line<T>) -> bool
where
    T: GeoFloat,
    B: Into<Bounds<T>>,
{
    let b = bounds.into();
    let from = sector_of(b, line.start);
    let to = sector_of(b, line.end);

    if from.is_center() || to.is_center() {
        return true;
    }
    if from.shares_side(to) {
        trace!("rejected {:?}: both ends in {:?}", line, from & to);
        return false;
    }

    let both = from | to;
    trace!("testing {:?} against edges {:?}", line, both);
    both.edges().any(|edge| line_to_line(b.edge(edge), line))
}

impl<T: GeoFloat> Bounds<T> {
    /// See [`sector_of`].
    #[inline]
    pub fn sector_of(&self, point: Coordinate<T>) -> Sector {
        sector_of(*self, point)
    }

    /// See [`rect_to_point`].
    #[inline]
    pub fn contains_point(&self, point: Coordinate<T>) -> bool {
        rect_to_point(*self, point)
    }

    /// See [`rect_to_circle`].
    #[inline]
    pub fn intersects_circle(&self, circle: &Circle<T>) -> bool {
        rect_to_circle(*self, circle.center, circle.radius)
    }

    /// See [`rect_to_line`].
    #[inline]
    pub fn intersects_line(&self, line: Line<T>) -> bool {
        rect_to_line(*self, line)
    }

    /// Checks if two rectangles overlap, using the same half-open
    /// convention as [`rect_to_point`].
    pub fn intersects_bounds(&self, other: &Bounds<T>) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
