//! Narrow-phase intersection tests between 2D primitives.
//!
//! 1. [Predicates](#predicates)
//! 1. [Sectors](#sectors)
//! 1. [Shapes](#shapes)
//!
//! # Predicates
//!
//! Stateless functions that answer collision and containment queries
//! between points ([`Coordinate`]), line segments ([`Line`]), circles
//! ([`Circle`]) and axis-aligned rectangles ([`Bounds`]). All of them
//! are generic over the float type and run in constant time.
//!
//! The boundary conventions differ per shape and are kept consistent
//! across every predicate:
//!
//! - circles are open: touching a circle is not intersecting it;
//! - rectangles are half-open: the left and top edges are inside, the
//!   right and bottom edges are not;
//! - segments are closed, but parallel segments never intersect.
//!
//! The rectangle predicates accept anything convertible into
//! [`Bounds`], including a [`Rect`] and an `(x, y, width, height)`
//! tuple.
//!
//! ```rust
//! use geo::{Coordinate, Line};
//! use geo_collide::{rect_to_circle, rect_to_line, rect_to_point};
//!
//! let rect = (0., 0., 10., 10.);
//! assert!(rect_to_point(rect, Coordinate { x: 0., y: 0. }));
//! assert!(!rect_to_point(rect, Coordinate { x: 10., y: 10. }));
//! assert!(rect_to_line(rect, Line::from([(5., 5.), (20., 20.)])));
//! assert!(rect_to_circle(rect, Coordinate { x: 15., y: 5. }, 6.));
//! ```
//!
//! # Sectors
//!
//! [`sector_of`] classifies a point into one of the nine regions
//! around a rectangle as a [`Sector`] bit mask, following the
//! [Cohen–Sutherland] outcodes. The rectangle predicates use it to
//! reject segments lying beyond a common edge and to test only the
//! edges facing a point.
//!
//! # Shapes
//!
//! [`Shape`] wraps any of the primitives and dispatches
//! [`Shape::intersects`] to the matching predicate. Implement
//! [`Collidable`] for custom types to test them against each other.
//!
//! [`Coordinate`]: geo::Coordinate
//! [`Line`]: geo::Line
//! [`Rect`]: geo::Rect
//! [Cohen–Sutherland]: //en.wikipedia.org/wiki/Cohen%E2%80%93Sutherland_algorithm
mod bounds;
pub use bounds::{Bounds, Edge};

pub mod sector;
pub use sector::{sector_of, Sector};

pub mod line;
pub use line::{closest_point_on_line, line_intersection, line_to_line, line_to_point};

pub mod circle;
pub use circle::{circle_to_circle, circle_to_line, circle_to_point, Circle};

pub mod rect;
pub use rect::{rect_to_circle, rect_to_line, rect_to_point};

pub mod shape;
pub use shape::{first_hit, Collidable, Shape};

pub(crate) mod utils;

// Lets the shared random helpers name this crate from unit tests.
#[cfg(test)]
extern crate self as geo_collide;

#[cfg(test)]
#[path = "../benches/utils/random.rs"]
pub mod random;
