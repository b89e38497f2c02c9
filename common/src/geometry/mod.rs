//! Points, line segments and triangular facets along with the plane
//! intersection math used to slice them.

use nalgebra::Vector3;

mod bounding_box;
mod facet;
mod line;

pub use bounding_box::BoundingBox;
pub use facet::Facet;
pub use line::Line;

pub type Pos = Vector3<f32>;

/// Linear interpolation along the line through `(x1, y1)` and `(x2, y2)`,
/// returning the `y` value at `x`. The caller must ensure `x1 != x2`.
#[inline]
pub fn intersect_param(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    (y2 - y1) / (x2 - x1) * (x - x1) + y1
}

/// Checks if the segment from `a` to `b` strictly crosses the horizontal
/// plane at `height`. An endpoint lying exactly on the plane is not a
/// crossing.
#[inline]
pub fn is_intersect(a: &Pos, b: &Pos, height: f32) -> bool {
    (a.z - height) * (b.z - height) < 0.0
}

/// Gets the point where the line through `a` and `b` meets the plane at
/// `height`, interpolating x and y with z as the independent variable.
pub fn point_at_z(a: &Pos, b: &Pos, height: f32) -> Pos {
    Pos::new(
        intersect_param(a.z, a.x, b.z, b.x, height),
        intersect_param(a.z, a.y, b.z, b.y, height),
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_between_endpoints() {
        assert_eq!(intersect_param(0.0, 0.0, 2.0, 4.0, 1.0), 2.0);
        assert_eq!(intersect_param(1.0, 3.0, 3.0, 3.0, 2.5), 3.0);
        assert_eq!(intersect_param(0.0, 1.0, 1.0, 0.0, 0.25), 0.75);
    }

    #[test]
    fn crossing_requires_strict_sign_change() {
        let (a, b) = (Pos::new(0.0, 0.0, 0.0), Pos::new(0.0, 0.0, 1.0));
        assert!(is_intersect(&a, &b, 0.5));
        assert!(is_intersect(&b, &a, 0.5));

        assert!(!is_intersect(&a, &b, 0.0));
        assert!(!is_intersect(&a, &b, 1.0));
        assert!(!is_intersect(&a, &b, 1.5));
        assert!(!is_intersect(&a, &b, -0.5));
    }

    #[test]
    fn point_at_z_lies_on_segment() {
        let (a, b) = (Pos::new(0.0, 2.0, 0.0), Pos::new(4.0, 6.0, 2.0));
        assert_eq!(point_at_z(&a, &b, 1.0), Pos::new(2.0, 4.0, 1.0));
        assert_eq!(point_at_z(&b, &a, 0.5), Pos::new(1.0, 3.0, 0.5));
    }
}
