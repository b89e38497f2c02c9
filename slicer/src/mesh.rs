use std::sync::Arc;

use common::geometry::{BoundingBox, Facet, Line};
use mesh_format::Solid;

/// An immutable list of facets. Cloning is cheap and never shares anything
/// that can be mutated, transformations like [`Mesh::scaled`] build a new
/// mesh instead.
#[derive(Debug, Clone)]
pub struct Mesh {
    inner: Arc<MeshInner>,
}

#[derive(Debug)]
struct MeshInner {
    name: String,
    facets: Box<[Facet]>,
    bounds: Option<BoundingBox>,
}

impl Mesh {
    /// Creates a mesh, computing its bounds from the facet vertices.
    pub fn new(name: impl Into<String>, facets: Vec<Facet>) -> Self {
        let bounds = vertex_bounds(&facets);
        Self {
            inner: Arc::new(MeshInner {
                name: name.into(),
                facets: facets.into_boxed_slice(),
                bounds,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn facets(&self) -> &[Facet] {
        self.inner.facets.as_ref()
    }

    pub fn facet_count(&self) -> usize {
        self.facets().len()
    }

    pub fn is_empty(&self) -> bool {
        self.facets().is_empty()
    }

    /// Get the minimum and maximum of each component of every vertex in the
    /// model. `None` for a mesh without facets.
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.inner.bounds
    }

    /// Returns a copy of this mesh with every vertex multiplied by `factor`.
    /// Scaling the result again compounds, so callers wanting a fixed scale
    /// should keep the unscaled mesh around and scale from that.
    pub fn scaled(&self, factor: f32) -> Self {
        let facets = self.facets().iter().map(|x| x.scaled(factor)).collect();
        Self::new(self.name(), facets)
    }

    /// Intersects every facet with the plane at `height`, in facet order.
    /// Duplicates are kept, see [`crate::layer::Layer::push`] for removing
    /// them.
    pub fn intersect_plane(&self, height: f32) -> impl Iterator<Item = Line> + '_ {
        self.facets().iter().filter_map(move |x| x.intersect(height))
    }
}

impl From<Solid> for Mesh {
    fn from(solid: Solid) -> Self {
        Self::new(solid.name, solid.facets)
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new(String::new(), Vec::new())
    }
}

fn vertex_bounds(facets: &[Facet]) -> Option<BoundingBox> {
    BoundingBox::from_points(facets.iter().flat_map(|x| x.vertices.iter()))
}

#[cfg(test)]
mod tests {
    use common::geometry::Pos;

    use super::*;
    use crate::builder::MeshBuilder;

    #[test]
    fn bounds_come_from_vertices() {
        let mut builder = MeshBuilder::new();
        builder.add_box(Pos::new(-1.0, 0.0, 2.0), Pos::new(3.0, 1.0, 4.0));
        let mesh = builder.build("box");

        let bounds = mesh.bounds().unwrap();
        assert_eq!(bounds.min, Pos::new(-1.0, 0.0, 2.0));
        assert_eq!(bounds.max, Pos::new(3.0, 1.0, 4.0));
        assert_eq!(bounds.size(), Pos::new(4.0, 1.0, 2.0));
    }

    #[test]
    fn scaling_does_not_touch_source() {
        let mut builder = MeshBuilder::new();
        builder.add_box(Pos::zeros(), Pos::repeat(1.0));
        let mesh = builder.build("cube");

        let scaled = mesh.scaled(3.0);
        assert_eq!(scaled.bounds().unwrap().max, Pos::repeat(3.0));
        assert_eq!(mesh.bounds().unwrap().max, Pos::repeat(1.0));
        assert_eq!(scaled.facet_count(), mesh.facet_count());
        assert_eq!(scaled.name(), "cube");

        // Scaling the original twice gives the same result, nothing compounds.
        assert_eq!(mesh.scaled(3.0).facets(), scaled.facets());
    }

    #[test]
    fn empty_mesh() {
        let mesh = Mesh::default();
        assert!(mesh.is_empty());
        assert_eq!(mesh.bounds(), None);
        assert_eq!(mesh.intersect_plane(0.0).count(), 0);
    }
}
