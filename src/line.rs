use geo::{Coordinate, GeoFloat, Line};

use crate::utils::{clamp_unit, distance_squared, dot, perp_dot};

/// Solve for the parameters `(t, u)` at which the two segments cross.
///
/// Both segments are parametrized from their start point
/// (`a.start + t * a.delta()`, `b.start + u * b.delta()`). Returns
/// `None` if the directions are parallel, or if either parameter lies
/// outside `[0, 1]`.
#[inline]
fn crossing_params<T: GeoFloat>(a: Line<T>, b: Line<T>) -> Option<(T, T)> {
    let ad = a.delta();
    let bd = b.delta();
    let denom = perp_dot(ad, bd);

    // Parallel (or collinear) directions have either none or
    // infinitely many common points; both are reported as no crossing.
    if denom == T::zero() {
        return None;
    }

    let c = b.start - a.start;
    let t = perp_dot(c, bd) / denom;
    if t < T::zero() || t > T::one() {
        return None;
    }

    let u = perp_dot(c, ad) / denom;
    if u < T::zero() || u > T::one() {
        return None;
    }

    Some((t, u))
}

/// Checks if two line segments cross.
///
/// The end points are included, so segments touching at an end point
/// cross. Parallel segments never cross, even if they are collinear
/// and overlap; neither does a zero-length segment, whose direction is
/// parallel to everything.
pub fn line_to_line<T: GeoFloat>(a: Line<T>, b: Line<T>) -> bool {
    crossing_params(a, b).is_some()
}

/// Intersect two line segments and return the crossing point.
///
/// Same semantics as [`line_to_line`]; the point is computed along
/// `a`.
///
/// ```rust
/// use geo::{Coordinate, Line};
/// use geo_collide::line_intersection;
///
/// let a = Line::from([(0., 0.), (10., 10.)]);
/// let b = Line::from([(0., 10.), (10., 0.)]);
/// assert_eq!(line_intersection(a, b), Some(Coordinate { x: 5., y: 5. }));
/// ```
pub fn line_intersection<T: GeoFloat>(a: Line<T>, b: Line<T>) -> Option<Coordinate<T>> {
    crossing_params(a, b).map(|(t, _)| a.start + a.delta() * t)
}

/// Returns the point on the segment `line` closest to `target`.
///
/// A degenerate segment (`start == end`) returns its start point.
pub fn closest_point_on_line<T: GeoFloat>(line: Line<T>, target: Coordinate<T>) -> Coordinate<T> {
    let v = line.delta();
    let len_sq = dot(v, v);
    if len_sq == T::zero() {
        return line.start;
    }

    let w = target - line.start;
    let t = clamp_unit(dot(w, v) / len_sq);
    line.start + v * t
}

/// Checks if the point lies on the segment, up to rounding error.
///
/// The tolerance is a few ulps of the largest coordinate involved, so
/// a point computed by [`line_intersection`] lies on both of its
/// segments. Exact collinearity tests miss such points, since the
/// rounded crossing point is rarely exactly on either line.
pub fn line_to_point<T: GeoFloat>(line: Line<T>, point: Coordinate<T>) -> bool {
    let closest = closest_point_on_line(line, point);
    let scale = [
        line.start.x,
        line.start.y,
        line.end.x,
        line.end.y,
        point.x,
        point.y,
    ]
    .iter()
    .fold(T::one(), |max, v| max.max(v.abs()));

    let four = T::one() + T::one() + T::one() + T::one();
    let tolerance = T::epsilon() * four * four * scale;
    distance_squared(closest, point) <= tolerance * tolerance
}
