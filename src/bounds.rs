use geo::{Coordinate, GeoFloat, Line, Rect};

/// An axis-aligned rectangle with half-open bounds.
///
/// The rectangle is stored as an origin and a size. The `y`-axis is
/// assumed to grow downwards, so the origin is the top-left corner:
/// `top() == y` and `bottom() == y + height`.
///
/// A point is inside the rectangle iff `left() <= x < right()` and
/// `top() <= y < bottom()`. The left and top edges belong to the
/// rectangle, the right and bottom edges do not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T: GeoFloat> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

/// One of the four sides of a [`Bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: &'static [Edge] = &[Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

impl<T: GeoFloat> Bounds<T> {
    /// Create from the top-left corner and the size.
    ///
    /// Panics if `width` or `height` is negative or NaN.
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        assert!(width >= T::zero(), "bounds require a non-negative width");
        assert!(height >= T::zero(), "bounds require a non-negative height");
        Bounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from the coordinates of the four edges.
    ///
    /// Panics unless `left <= right` and `top <= bottom`.
    pub fn from_edges(left: T, top: T, right: T, bottom: T) -> Self {
        Bounds::new(left, top, right - left, bottom - top)
    }

    #[inline]
    pub fn left(&self) -> T {
        self.x
    }

    #[inline]
    pub fn top(&self) -> T {
        self.y
    }

    #[inline]
    pub fn right(&self) -> T {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> T {
        self.y + self.height
    }

    /// The top-left corner.
    #[inline]
    pub fn origin(&self) -> Coordinate<T> {
        Coordinate {
            x: self.x,
            y: self.y,
        }
    }

    pub fn center(&self) -> Coordinate<T> {
        let two = T::one() + T::one();
        Coordinate {
            x: self.x + self.width / two,
            y: self.y + self.height / two,
        }
    }

    /// Returns the closed segment along the given side.
    ///
    /// Horizontal edges run left to right, vertical edges run top to
    /// bottom.
    pub fn edge(&self, edge: Edge) -> Line<T> {
        let (left, top, right, bottom) = (self.left(), self.top(), self.right(), self.bottom());
        match edge {
            Edge::Top => Line::new((left, top), (right, top)),
            Edge::Bottom => Line::new((left, bottom), (right, bottom)),
            Edge::Left => Line::new((left, top), (left, bottom)),
            Edge::Right => Line::new((right, top), (right, bottom)),
        }
    }

    /// Iterate over all four edges in the order of [`Edge::ALL`].
    pub fn edges(&self) -> impl Iterator<Item = Line<T>> + '_ {
        Edge::ALL.iter().map(move |&e| self.edge(e))
    }
}

/// Convert from a [`Rect`]; the `min` corner becomes the origin.
impl<T: GeoFloat> From<Rect<T>> for Bounds<T> {
    fn from(rect: Rect<T>) -> Self {
        let min = rect.min();
        Bounds {
            x: min.x,
            y: min.y,
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Convert from an `(x, y, width, height)` tuple.
///
/// Unlike [`Bounds::new`] this does not validate the size, so the
/// predicates taking `Into<Bounds>` never panic. A `NaN` size contains
/// no point.
impl<T: GeoFloat> From<(T, T, T, T)> for Bounds<T> {
    fn from((x, y, width, height): (T, T, T, T)) -> Self {
        Bounds {
            x,
            y,
            width,
            height,
        }
    }
}

impl<T: GeoFloat> From<Bounds<T>> for Rect<T> {
    fn from(b: Bounds<T>) -> Self {
        Rect::new((b.left(), b.top()), (b.right(), b.bottom()))
    }
}
