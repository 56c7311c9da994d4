use geo::{Coordinate, GeoFloat};

/// Dot product of two vectors.
#[inline]
pub fn dot<T: GeoFloat>(a: Coordinate<T>, b: Coordinate<T>) -> T {
    a.x * b.x + a.y * b.y
}

/// The 2d cross product (z-component of the 3d cross product).
#[inline]
pub fn perp_dot<T: GeoFloat>(a: Coordinate<T>, b: Coordinate<T>) -> T {
    a.x * b.y - a.y * b.x
}

#[inline]
pub fn distance_squared<T: GeoFloat>(a: Coordinate<T>, b: Coordinate<T>) -> T {
    let d = a - b;
    dot(d, d)
}

#[inline]
pub fn clamp_unit<T: GeoFloat>(t: T) -> T {
    t.max(T::zero()).min(T::one())
}
