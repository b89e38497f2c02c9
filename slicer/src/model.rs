use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use common::{
    config::{ConfigError, SliceConfig},
    geometry::BoundingBox,
};
use mesh_format::ParseError;
use thiserror::Error;
use tracing::{debug, info};

use crate::{layer::Layer, mesh::Mesh, slicer::Slicer};

/// Holds a loaded model along with the products of the last slice, for
/// display by a viewer.
///
/// The unscaled mesh read by [`Model::open`] is kept for the lifetime of the
/// model. Every [`Model::slice`] scales a fresh copy of it, so slicing at
/// different scales never compounds.
#[derive(Debug, Clone, Default)]
pub struct Model {
    pristine: Option<Mesh>,
    mesh: Option<Mesh>,
    layers: Vec<Layer>,
    slice_config: Option<SliceConfig>,
    current_layer: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    Unloaded,
    Loaded,
    Sliced,
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse `{}`: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error("no model has been loaded")]
    NotLoaded,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and parses the mesh at `path`, replacing whatever was loaded
    /// before. On failure the model is left exactly as it was.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<(), ModelError> {
        let path = path.as_ref();
        let io_error = |source| ModelError::Io {
            path: path.to_owned(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        let solid = mesh_format::parse(BufReader::new(file)).map_err(|err| match err {
            ParseError::Io(source) => io_error(source),
            source => ModelError::Parse {
                path: path.to_owned(),
                source,
            },
        })?;

        info!("Loaded `{}` from `{}`", solid.name, path.display());
        self.load(Mesh::from(solid));
        Ok(())
    }

    /// Makes `mesh` the unscaled model, dropping any previous slice.
    pub fn load(&mut self, mesh: Mesh) {
        info!("Model has {} facets", mesh.facet_count());
        if let Some(bounds) = mesh.bounds() {
            let size = bounds.size();
            info!("Model size: {} x {} x {}", size.x, size.y, size.z);
            debug!("Model bounds: {:?} to {:?}", bounds.min, bounds.max);
        }

        self.pristine = Some(mesh.clone());
        self.mesh = Some(mesh);
        self.layers.clear();
        self.slice_config = None;
        self.current_layer = None;
    }

    /// Scales the unscaled model by `slice_config.scale` and slices it,
    /// replacing the working mesh and layers. The config is validated before
    /// anything is touched.
    pub fn slice(&mut self, slice_config: &SliceConfig) -> Result<&[Layer], ModelError> {
        slice_config.validate()?;
        let pristine = self.pristine.clone().ok_or(ModelError::NotLoaded)?;
        debug!("Slicing with {slice_config:?}");

        let result = Slicer::new(slice_config.clone(), pristine).slice();
        self.mesh = Some(result.mesh);
        self.layers = result.layers;
        self.slice_config = Some(slice_config.clone());
        self.current_layer = (!self.layers.is_empty()).then_some(0);

        Ok(&self.layers)
    }

    /// Like [`Model::slice`], taking the parameters as strings keyed by
    /// name.
    pub fn slice_params(
        &mut self,
        params: &HashMap<String, String>,
    ) -> Result<&[Layer], ModelError> {
        let slice_config = SliceConfig::from_params(params)?;
        self.slice(&slice_config)
    }

    pub fn state(&self) -> ModelState {
        match (&self.pristine, &self.slice_config) {
            (None, _) => ModelState::Unloaded,
            (Some(_), None) => ModelState::Loaded,
            (Some(_), Some(_)) => ModelState::Sliced,
        }
    }

    /// The mesh as read from disk.
    pub fn pristine(&self) -> Option<&Mesh> {
        self.pristine.as_ref()
    }

    /// The mesh as last scaled, or the unscaled mesh if nothing has been
    /// sliced yet.
    pub fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_ref()
    }

    /// Bounds of the working mesh.
    pub fn dimension(&self) -> Option<BoundingBox> {
        self.mesh.as_ref().and_then(|x| x.bounds())
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn slice_config(&self) -> Option<&SliceConfig> {
        self.slice_config.as_ref()
    }

    pub fn current_layer_index(&self) -> Option<usize> {
        self.current_layer
    }

    pub fn current_layer(&self) -> Option<&Layer> {
        self.layers.get(self.current_layer?)
    }

    /// Moves the layer cursor, returning false if `index` is out of range.
    pub fn set_current_layer(&mut self, index: usize) -> bool {
        if index >= self.layers.len() {
            return false;
        }

        self.current_layer = Some(index);
        true
    }
}
