//! This crate contains the [`mesh::Mesh`] struct along with the plane sweep
//! that turns it into a stack of [`layer::Layer`]s, and the [`model::Model`]
//! that ties loading, scaling and slicing together.

pub mod builder;
pub mod format;
pub mod layer;
pub mod mesh;
pub mod model;
pub mod slicer;

pub use common::geometry::Pos;
