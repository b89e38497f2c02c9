use common::geometry::{BoundingBox, Facet};

mod error;
mod stl;

pub use error::ParseError;
pub use stl::{parse, write, Reader, Statement};

/// The contents of one `solid ... endsolid` block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solid {
    pub name: String,
    pub facets: Vec<Facet>,
}

impl Solid {
    pub fn new(name: impl Into<String>, facets: Vec<Facet>) -> Self {
        Self {
            name: name.into(),
            facets,
        }
    }

    /// Bounds of every facet vertex. The normals in the file are not
    /// considered.
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.facets.iter().flat_map(|x| x.vertices.iter()))
    }
}
