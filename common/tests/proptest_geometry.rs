//! Property tests for bounding boxes and facet cuts.

use common::geometry::{BoundingBox, Facet, Pos};
use proptest::prelude::*;

fn arb_position() -> impl Strategy<Value = Pos> {
    prop::array::uniform3(-100.0..100.0f32).prop_map(Pos::from)
}

fn arb_facet() -> impl Strategy<Value = Facet> {
    [arb_position(), arb_position(), arb_position()]
        .prop_map(|vertices| Facet::new(Pos::z(), vertices))
}

proptest! {
    #[test]
    fn bounds_are_ordered(points in prop::collection::vec(arb_position(), 1..64)) {
        let bounds = BoundingBox::from_points(points.iter()).unwrap();
        prop_assert!(bounds.min.iter().zip(bounds.max.iter()).all(|(a, b)| a <= b));
        for point in points.iter() {
            prop_assert!(point.iter().zip(bounds.min.iter()).all(|(p, m)| p >= m));
            prop_assert!(point.iter().zip(bounds.max.iter()).all(|(p, m)| p <= m));
        }
    }

    #[test]
    fn planes_outside_facet_miss(facet in arb_facet(), offset in 0.001..50.0f32) {
        let (low, high) = facet.z_range();
        prop_assert_eq!(facet.intersect(low - offset), None);
        prop_assert_eq!(facet.intersect(high + offset), None);
    }

    #[test]
    fn cuts_lie_in_plane(facet in arb_facet(), t in 0.0..=1.0f32) {
        let (low, high) = facet.z_range();
        let height = low + (high - low) * t;
        if let Some(line) = facet.intersect(height) {
            prop_assert!(line.points().iter().all(|x| x.z == height));
        }
    }

    #[test]
    fn corner_over_level_edge_misses(facet in arb_facet(), corner in 0..3usize) {
        // Level the edge opposite `corner` and cut through the corner alone.
        let mut facet = facet;
        let level = facet.vertices[(corner + 1) % 3].z;
        facet.vertices[(corner + 2) % 3].z = level;
        let height = facet.vertices[corner].z;

        prop_assume!(height != level);
        prop_assert_eq!(facet.intersect(height), None);
    }

    #[test]
    fn cuts_are_finite(facet in arb_facet(), corner in 0..3usize, t in 0.0..=1.0f32) {
        let (low, high) = facet.z_range();
        for height in [facet.vertices[corner].z, low + (high - low) * t] {
            if let Some(line) = facet.intersect(height) {
                prop_assert!(line.points().iter().all(|x| x.iter().all(|c| c.is_finite())));
            }
        }
    }
}
