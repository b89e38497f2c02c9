//! Property tests for scaling meshes.

use common::geometry::{Facet, Pos};
use proptest::prelude::*;
use slicer::mesh::Mesh;

fn arb_position() -> impl Strategy<Value = Pos> {
    prop::array::uniform3(-100.0..100.0f32).prop_map(Pos::from)
}

fn arb_facet() -> impl Strategy<Value = Facet> {
    [arb_position(), arb_position(), arb_position()]
        .prop_map(|vertices| Facet::new(Pos::z(), vertices))
}

fn arb_mesh() -> impl Strategy<Value = Mesh> {
    prop::collection::vec(arb_facet(), 1..32).prop_map(|facets| Mesh::new("random", facets))
}

fn close(a: &Pos, b: &Pos) -> bool {
    (a - b).norm() <= 1e-3 * (1.0 + a.norm().max(b.norm()))
}

proptest! {
    #[test]
    fn scaling_scales_bounds(mesh in arb_mesh(), factor in 0.01..50.0f32) {
        let bounds = mesh.bounds().unwrap();
        let scaled = mesh.scaled(factor).bounds().unwrap();
        prop_assert!(close(&scaled.min, &(bounds.min * factor)));
        prop_assert!(close(&scaled.max, &(bounds.max * factor)));
    }

    #[test]
    fn scaling_back_restores(mesh in arb_mesh(), factor in 0.1..10.0f32) {
        let restored = mesh.scaled(factor).scaled(1.0 / factor);
        for (a, b) in mesh.facets().iter().zip(restored.facets()) {
            prop_assert_eq!(a.normal, b.normal);
            for (p, q) in a.vertices.iter().zip(b.vertices.iter()) {
                prop_assert!(close(p, q));
            }
        }
    }
}
