use std::time::Instant;

use common::{config::SliceConfig, geometry::BoundingBox};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, info, warn};

use crate::{layer::Layer, mesh::Mesh};

/// Used to slice a mesh.
pub struct Slicer {
    slice_config: SliceConfig,
    mesh: Mesh,
}

/// The products of one slicing run.
#[derive(Debug, Clone)]
pub struct SliceResult {
    /// The mesh after scaling, which is what the layers were cut from.
    pub mesh: Mesh,
    /// Non-empty layers, bottom to top.
    pub layers: Vec<Layer>,
}

impl Slicer {
    /// Creates a new slicer given a slice config and the unscaled mesh.
    pub fn new(slice_config: SliceConfig, mesh: Mesh) -> Self {
        Self { slice_config, mesh }
    }

    pub fn slice_config(&self) -> &SliceConfig {
        &self.slice_config
    }

    /// Scales the mesh by the configured factor and slices the result. The
    /// mesh held by the slicer is left as is, so every call starts from the
    /// same geometry.
    pub fn slice(&self) -> SliceResult {
        let start = Instant::now();

        let mesh = self.mesh.scaled(self.slice_config.scale);
        let layers = slice_mesh(&mesh, &self.slice_config);

        info!(
            "Sliced `{}` into {} layers in {:?}",
            mesh.name(),
            layers.len(),
            start.elapsed()
        );
        SliceResult { mesh, layers }
    }
}

/// Sweeps a plane up through `mesh`, starting one layer height above the
/// bottom and stopping before the plane reaches the top. Layers that come out
/// empty are dropped. The mesh is sliced as given, scaling is up to the
/// caller.
///
/// Only a bottom to top sweep (`+Z`) is supported. Any other direction in the
/// config, `-Z` included, is logged and slicing proceeds along `+Z`.
pub fn slice_mesh(mesh: &Mesh, slice_config: &SliceConfig) -> Vec<Layer> {
    if !slice_config.direction.is_supported() {
        warn!(
            "Slicing along {} is not supported, slicing along +Z instead",
            slice_config.direction
        );
    }

    let Some(bounds) = mesh.bounds() else {
        return Vec::new();
    };

    let heights = layer_heights(&bounds, slice_config.height);
    debug!(
        "Slicing {} facets at {} heights from z = {} to z = {}",
        mesh.facet_count(),
        heights.len(),
        bounds.min.z,
        bounds.max.z
    );

    heights
        .into_par_iter()
        .map(|height| slice_layer(mesh, height))
        .filter(|layer| !layer.is_empty())
        .collect()
}

/// Intersects every facet with the plane at `height`, dropping duplicate
/// segments such as an edge shared by two facets lying in the plane.
pub fn slice_layer(mesh: &Mesh, height: f32) -> Layer {
    let mut layer = Layer::new(height);
    layer.extend(mesh.intersect_plane(height));
    layer
}

/// Plane heights for a sweep over `bounds`. Each height is the previous one
/// plus `layer_height`, the first is `min.z + layer_height` and all are
/// strictly below `max.z`.
pub fn layer_heights(bounds: &BoundingBox, layer_height: f32) -> Vec<f32> {
    let mut heights = Vec::new();
    if layer_height.is_nan() || layer_height <= 0.0 {
        return heights;
    }

    let mut height = bounds.min.z + layer_height;
    while height < bounds.max.z {
        heights.push(height);

        let next = height + layer_height;
        if next <= height {
            warn!("Layer height {layer_height} is too small to advance past z = {height}");
            break;
        }
        height = next;
    }

    heights
}
