use geo::{Coordinate, GeoFloat, Line, Point, Rect};
use log::debug;

use crate::{
    bounds::Bounds,
    circle::{circle_to_line, circle_to_point, Circle},
    line::{line_to_line, line_to_point},
    rect::{rect_to_circle, rect_to_line, rect_to_point},
};

/// Any of the primitive shapes supported by the predicates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<T: GeoFloat> {
    Point(Coordinate<T>),
    Line(Line<T>),
    Circle(Circle<T>),
    Rect(Bounds<T>),
}

impl<T: GeoFloat> From<Coordinate<T>> for Shape<T> {
    fn from(c: Coordinate<T>) -> Self {
        Shape::Point(c)
    }
}

impl<T: GeoFloat> From<Point<T>> for Shape<T> {
    fn from(p: Point<T>) -> Self {
        Shape::Point(p.0)
    }
}

impl<T: GeoFloat> From<Line<T>> for Shape<T> {
    fn from(l: Line<T>) -> Self {
        Shape::Line(l)
    }
}

impl<T: GeoFloat> From<Circle<T>> for Shape<T> {
    fn from(c: Circle<T>) -> Self {
        Shape::Circle(c)
    }
}

impl<T: GeoFloat> From<Bounds<T>> for Shape<T> {
    fn from(b: Bounds<T>) -> Self {
        Shape::Rect(b)
    }
}

impl<T: GeoFloat> From<Rect<T>> for Shape<T> {
    fn from(r: Rect<T>) -> Self {
        Shape::Rect(r.into())
    }
}

impl<T: GeoFloat> Shape<T> {
    /// Checks if two shapes intersect.
    ///
    /// Each pair is handed to the matching predicate with the same
    /// boundary conventions: circles are open, rectangles are
    /// half-open and segments are closed. A point meets another point
    /// only if they are equal, and meets a segment if it lies on it up
    /// to rounding error (see [`line_to_point`]); parallel segments
    /// never meet.
    pub fn intersects(&self, other: &Shape<T>) -> bool {
        match (*self, *other) {
            (Shape::Point(p), Shape::Point(q)) => p == q,
            (Shape::Point(p), Shape::Line(l)) | (Shape::Line(l), Shape::Point(p)) => {
                line_to_point(l, p)
            }
            (Shape::Point(p), Shape::Circle(c)) | (Shape::Circle(c), Shape::Point(p)) => {
                circle_to_point(c.center, c.radius, p)
            }
            (Shape::Point(p), Shape::Rect(b)) | (Shape::Rect(b), Shape::Point(p)) => {
                rect_to_point(b, p)
            }

            (Shape::Line(a), Shape::Line(b)) => line_to_line(a, b),
            (Shape::Line(l), Shape::Circle(c)) | (Shape::Circle(c), Shape::Line(l)) => {
                circle_to_line(c.center, c.radius, l)
            }
            (Shape::Line(l), Shape::Rect(b)) | (Shape::Rect(b), Shape::Line(l)) => {
                rect_to_line(b, l)
            }

            (Shape::Circle(a), Shape::Circle(b)) => a.intersects_circle(&b),
            (Shape::Circle(c), Shape::Rect(b)) | (Shape::Rect(b), Shape::Circle(c)) => {
                rect_to_circle(b, c.center, c.radius)
            }

            (Shape::Rect(a), Shape::Rect(b)) => a.intersects_bounds(&b),
        }
    }
}

/// Interface for types that can be tested for collisions.
///
/// Implement this for game objects that carry a collision shape
/// (typically by computing it from a position). The [`Shape`]
/// primitives and the `geo` types implement it directly.
pub trait Collidable {
    type Scalar: GeoFloat;

    fn shape(&self) -> Shape<Self::Scalar>;

    /// Checks if the shapes of `self` and `other` intersect.
    fn collides_with<C>(&self, other: &C) -> bool
    where
        C: Collidable<Scalar = Self::Scalar> + ?Sized,
    {
        self.shape().intersects(&other.shape())
    }
}

impl<T: GeoFloat> Collidable for Shape<T> {
    type Scalar = T;

    fn shape(&self) -> Shape<T> {
        *self
    }
}

macro_rules! impl_collidable {
    ($($ty:ident),*) => {
        $(
            impl<T: GeoFloat> Collidable for $ty<T> {
                type Scalar = T;

                fn shape(&self) -> Shape<T> {
                    (*self).into()
                }
            }
        )*
    };
}
impl_collidable!(Coordinate, Point, Line, Circle, Bounds, Rect);

impl<'a, C: Collidable + ?Sized> Collidable for &'a C {
    type Scalar = C::Scalar;

    fn shape(&self) -> Shape<Self::Scalar> {
        (**self).shape()
    }
}

/// Returns the index of the first candidate colliding with `probe`.
///
/// The candidates are tested in order with the exact predicates; any
/// filtering by proximity is expected to have happened already.
pub fn first_hit<P, C>(probe: &P, candidates: &[C]) -> Option<usize>
where
    P: Collidable + ?Sized,
    C: Collidable<Scalar = P::Scalar>,
{
    let shape = probe.shape();
    let hit = candidates
        .iter()
        .position(|candidate| shape.intersects(&candidate.shape()));
    debug!(
        "probe {:?} hit {:?} of {} candidates",
        shape,
        hit,
        candidates.len()
    );
    hit
}

#[cfg(test)]
mod tests {
    use rand::{thread_rng, Rng};

    use super::*;
    use crate::{line_intersection, random::*, tests::init_log};

    #[test]
    fn test_point_pairs() {
        let p: Shape<f64> = Coordinate { x: 1., y: 1. }.into();
        assert!(p.intersects(&p));
        assert!(!p.intersects(&Coordinate { x: 1., y: 2. }.into()));

        let l: Shape<f64> = Line::from([(0., 0.), (2., 2.)]).into();
        assert!(p.intersects(&l));
        assert!(l.intersects(&p));
        assert!(!l.intersects(&Coordinate { x: 3., y: 3. }.into()));
        assert!(!l.intersects(&Coordinate { x: 1., y: 0. }.into()));
    }

    #[test]
    fn test_crossing_point_meets_both_lines() {
        let a = Line::from([(0., 0.), (10., 7.7)]);
        let b = Line::from([(1., 30.), (9., -2.)]);
        let pt = line_intersection(a, b).expect("segments cross");
        let pt = Shape::Point(pt);
        assert!(pt.intersects(&a.into()));
        assert!(Shape::Line(b).intersects(&pt));
    }

    #[test]
    fn test_rect_pairs() {
        let r: Shape<f64> = Bounds::new(0., 0., 10., 10.).into();
        assert!(r.intersects(&Circle::new((15., 5.), 6.).into()));
        assert!(!r.intersects(&Circle::new((15., 5.), 4.).into()));
        assert!(r.intersects(&Line::from([(5., 5.), (20., 20.)]).into()));
        assert!(r.intersects(&Point::new(0., 0.).into()));
        assert!(!r.intersects(&Point::new(10., 10.).into()));
        assert!(r.intersects(&Rect::new((9., 9.), (12., 12.)).into()));
    }

    #[test]
    fn test_collidable() {
        let circle = Circle::new((0., 0.), 1.);
        let line = Line::from([(-2., 0.5), (2., 0.5)]);
        assert!(circle.collides_with(&line));
        assert!(line.collides_with(&circle));
        assert!(!circle.collides_with(&Point::new(1., 0.)));
        assert!((&circle).collides_with(&Bounds::new(0.5, 0.5, 1., 1.)));
    }

    /// A game object whose shape follows its position.
    struct Ball {
        pos: (f64, f64),
    }

    impl Collidable for Ball {
        type Scalar = f64;

        fn shape(&self) -> Shape<f64> {
            Circle::new(self.pos, 0.5).into()
        }
    }

    #[test]
    fn test_first_hit() {
        init_log();
        let balls = vec![
            Ball { pos: (0., 0.) },
            Ball { pos: (5., 5.) },
            Ball { pos: (5.5, 5.) },
        ];
        let viewport = Bounds::new(4., 4., 2., 2.);
        assert_eq!(first_hit(&viewport, &balls), Some(1));
        assert_eq!(first_hit(&Bounds::new(20., 20., 2., 2.), &balls), None);
        assert_eq!(first_hit(&balls[0], &balls[1..]), None);
        assert_eq!(first_hit(&balls[1], &balls[2..]), Some(0));
    }

    #[test]
    fn test_symmetry() {
        let mut rng = thread_rng();
        let window: Rect<f64> = Rect::new([0., 0.], [100., 100.]);
        for _ in 0..2000 {
            let a = random_shape(&mut rng, window);
            let b = random_shape(&mut rng, window);
            assert_eq!(a.intersects(&b), b.intersects(&a), "{:?} vs {:?}", a, b);
        }
    }

    fn random_shape<R: Rng>(rng: &mut R, window: Rect<f64>) -> Shape<f64> {
        match rng.gen_range(0..4) {
            0 => uniform_point(rng, window).into(),
            1 => uniform_line(rng, window).into(),
            2 => uniform_circle(rng, window, 30.).into(),
            _ => uniform_bounds(rng, window).into(),
        }
    }
}
