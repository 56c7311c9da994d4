use std::f64::consts::PI;

use geo::{rotate::RotatePoint, Coordinate, Line, Rect};
use geo_collide::{Bounds, Circle};

use rand::Rng;
use rand_distr::Standard;

#[inline]
pub fn uniform_point<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Coordinate<f64> {
    let coords: [f64; 2] = rng.sample(Standard);
    let dims = bounds.max() - bounds.min();
    Coordinate {
        x: bounds.min().x + dims.x * coords[0],
        y: bounds.min().y + dims.y * coords[1],
    }
}

#[inline]
#[allow(dead_code)]
pub fn uniform_line<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Line<f64> {
    Line::new(uniform_point(rng, bounds), uniform_point(rng, bounds))
}

#[inline]
#[allow(dead_code)]
pub fn uniform_line_with_length<R: Rng>(rng: &mut R, bounds: Rect<f64>, length: f64) -> Line<f64> {
    let start = uniform_point(rng, bounds);
    let line = Line::new(start, start + (length, 0.).into());
    let angle = rng.sample::<f64, _>(Standard) * 2. * PI;
    line.rotate_around_point(angle, start.into())
}

/// A circle centered in `bounds` with radius up to `max_radius`.
#[inline]
#[allow(dead_code)]
pub fn uniform_circle<R: Rng>(rng: &mut R, bounds: Rect<f64>, max_radius: f64) -> Circle<f64> {
    let radius = rng.sample::<f64, _>(Standard) * max_radius;
    Circle::new(uniform_point(rng, bounds), radius)
}

/// A rectangle spanned by two uniform points of `bounds`.
#[inline]
#[allow(dead_code)]
pub fn uniform_bounds<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Bounds<f64> {
    Rect::new(uniform_point(rng, bounds), uniform_point(rng, bounds)).into()
}
