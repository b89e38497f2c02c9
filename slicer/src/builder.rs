use std::f32::consts::TAU;

use common::geometry::{Facet, Pos};

use crate::mesh::Mesh;

/// Procedurally builds meshes out of triangles, computing each facet normal
/// from its winding.
pub struct MeshBuilder {
    facets: Vec<Facet>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self { facets: Vec::new() }
    }

    pub fn add_face(&mut self, vertices: [Pos; 3]) {
        let [a, b, c] = vertices;
        let normal = (b - a)
            .cross(&(c - a))
            .try_normalize(f32::EPSILON)
            .unwrap_or_else(Pos::zeros);
        self.facets.push(Facet::new(normal, vertices));
    }

    /// Adds the quad `a b d c` as two triangles split along `b c`.
    pub fn add_quad(&mut self, quad: [Pos; 4]) {
        self.add_face([quad[0], quad[1], quad[2]]);
        self.add_face([quad[2], quad[1], quad[3]]);
    }

    pub fn build(self, name: impl Into<String>) -> Mesh {
        Mesh::new(name, self.facets)
    }
}

impl MeshBuilder {
    /// Adds an axis aligned box spanning `min` to `max` made of 12 triangles,
    /// wound so the normals point outwards.
    pub fn add_box(&mut self, min: Pos, max: Pos) {
        let corner = |x: bool, y: bool, z: bool| {
            Pos::new(
                if x { max.x } else { min.x },
                if y { max.y } else { min.y },
                if z { max.z } else { min.z },
            )
        };

        let (f, t) = (false, true);
        // Bottom and top
        self.add_quad([corner(f, f, f), corner(f, t, f), corner(t, f, f), corner(t, t, f)]);
        self.add_quad([corner(f, f, t), corner(t, f, t), corner(f, t, t), corner(t, t, t)]);
        // Front and back
        self.add_quad([corner(f, f, f), corner(t, f, f), corner(f, f, t), corner(t, f, t)]);
        self.add_quad([corner(f, t, f), corner(f, t, t), corner(t, t, f), corner(t, t, t)]);
        // Left and right
        self.add_quad([corner(f, f, f), corner(f, f, t), corner(f, t, f), corner(f, t, t)]);
        self.add_quad([corner(t, f, f), corner(t, t, f), corner(t, f, t), corner(t, t, t)]);
    }

    /// Adds a capped cylinder (or cone frustum) standing on `bottom`, with
    /// `precision` segments around its circumference.
    pub fn add_vertical_cylinder(
        &mut self,
        bottom: Pos,
        height: f32,
        (bottom_radius, top_radius): (f32, f32),
        precision: u32,
    ) {
        let top = bottom + Pos::new(0.0, 0.0, height);
        let ring = |i: u32| {
            let angle = TAU * (i % precision) as f32 / precision as f32;
            let normal = Pos::new(angle.cos(), angle.sin(), 0.0);
            (top + normal * top_radius, bottom + normal * bottom_radius)
        };

        for i in 0..precision {
            let (last_top, last_bottom) = ring(i);
            let (next_top, next_bottom) = ring(i + 1);

            self.add_quad([last_bottom, next_bottom, last_top, next_top]);
            self.add_face([top, last_top, next_top]);
            self.add_face([bottom, next_bottom, last_bottom]);
        }
    }
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_normals_point_out() {
        let mut builder = MeshBuilder::new();
        builder.add_box(Pos::zeros(), Pos::repeat(2.0));
        let mesh = builder.build("box");
        assert_eq!(mesh.facet_count(), 12);

        let center = mesh.bounds().unwrap().center();
        for facet in mesh.facets() {
            let [a, b, c] = facet.vertices;
            let facet_center = (a + b + c) / 3.0;
            assert!(facet.normal.dot(&(facet_center - center)) > 0.0);
        }
    }

    #[test]
    fn cylinder_facets() {
        let mut builder = MeshBuilder::new();
        builder.add_vertical_cylinder(Pos::zeros(), 4.0, (1.0, 1.0), 16);
        let mesh = builder.build("cylinder");
        assert_eq!(mesh.facet_count(), 16 * 4);

        let bounds = mesh.bounds().unwrap();
        assert_eq!(bounds.min.z, 0.0);
        assert_eq!(bounds.max.z, 4.0);
        assert!((bounds.max.x - 1.0).abs() < 1e-6);
    }
}
