//! [Cohen–Sutherland] style classification of points around a rectangle.
//!
//! The plane around a [`Bounds`] is split into nine sectors by the
//! lines through its four edges. Each sector is encoded as a bit mask:
//!
//! ```text
//!     1001  0001  0101
//!     1000  0000  0100
//!     1010  0010  0110
//! ```
//!
//! The rectangle predicates use the masks to reject pairs early and to
//! pick only the edges that need an exact test.
//!
//! [Cohen–Sutherland]: //en.wikipedia.org/wiki/Cohen%E2%80%93Sutherland_algorithm
use bitflags::bitflags;
use geo::{Coordinate, GeoFloat};

use crate::bounds::{Bounds, Edge};

bitflags! {
    /// Sector of a point relative to a rectangle.
    ///
    /// At most one of `TOP`/`BOTTOM` and at most one of `LEFT`/`RIGHT`
    /// is set by [`sector_of`], so only nine masks are ever produced.
    /// The empty mask is [`Sector::CENTER`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Sector: u8 {
        const TOP = 0b0001;
        const BOTTOM = 0b0010;
        const RIGHT = 0b0100;
        const LEFT = 0b1000;

        const TOP_LEFT = Self::TOP.bits() | Self::LEFT.bits();
        const TOP_RIGHT = Self::TOP.bits() | Self::RIGHT.bits();
        const BOTTOM_LEFT = Self::BOTTOM.bits() | Self::LEFT.bits();
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();
    }
}

impl Sector {
    /// The point lies inside the rectangle.
    pub const CENTER: Sector = Sector::empty();

    #[inline]
    pub fn is_center(&self) -> bool {
        self.is_empty()
    }

    /// Whether both masks lie beyond a common edge, in which case
    /// nothing between the two points can reach the rectangle.
    #[inline]
    pub fn shares_side(&self, other: Sector) -> bool {
        self.intersects(other)
    }

    /// The edges facing this sector, in the order top, bottom, left,
    /// right.
    pub fn edges(self) -> impl Iterator<Item = Edge> {
        Edge::ALL
            .iter()
            .copied()
            .filter(move |&edge| self.contains(Sector::from(edge)))
    }
}

impl From<Edge> for Sector {
    fn from(edge: Edge) -> Self {
        match edge {
            Edge::Top => Sector::TOP,
            Edge::Bottom => Sector::BOTTOM,
            Edge::Left => Sector::LEFT,
            Edge::Right => Sector::RIGHT,
        }
    }
}

/// Classify `point` into one of the nine sectors of `bounds`.
///
/// Uses the same half-open convention as
/// [`rect_to_point`](crate::rect_to_point): the result is
/// [`Sector::CENTER`] exactly when the rectangle contains the point.
pub fn sector_of<T, B>(bounds: B, point: Coordinate<T>) -> Sector
where
    T: GeoFloat,
    B: Into<Bounds<T>>,
{
    let bounds = bounds.into();
    let mut sector = Sector::CENTER;

    if point.x < bounds.left() {
        sector |= Sector::LEFT;
    } else if point.x >= bounds.right() {
        sector |= Sector::RIGHT;
    }

    if point.y < bounds.top() {
        sector |= Sector::TOP;
    } else if point.y >= bounds.bottom() {
        sector |= Sector::BOTTOM;
    }

    sector
}
