use tracing::{debug, error};

use crate::config::{DimensionSource, DimensionsConfig};
use crate::error::{RegionCropError, Result};
use crate::geometry::Dimensions;

use super::CropService;

/// Source of the original asset's pixel dimensions for a file.
pub trait ResolveDimensions {
    fn resolve(&self, filename: &str) -> Result<Dimensions>;
}

/// Same dimensions for every file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDimensions(pub Dimensions);

impl ResolveDimensions for FixedDimensions {
    fn resolve(&self, _filename: &str) -> Result<Dimensions> {
        self.0.validated()
    }
}

/// Looks dimensions up on the server for each file.
pub struct ServiceDimensions<'a>(pub &'a dyn CropService);

impl ResolveDimensions for ServiceDimensions<'_> {
    fn resolve(&self, filename: &str) -> Result<Dimensions> {
        let dims = self
            .0
            .dimensions(filename)
            .and_then(Dimensions::validated)
            .map_err(|e| {
                error!("Error fetching source dimensions for {filename}: {e}");
                RegionCropError::DimensionsUnavailable {
                    filename: filename.to_string(),
                    reason: e.to_string(),
                }
            })?;
        debug!(filename, %dims, "resolved source dimensions");
        Ok(dims)
    }
}

/// Build the resolver selected by the config.
pub fn resolver_for<'a>(
    config: &DimensionsConfig,
    service: &'a dyn CropService,
) -> Box<dyn ResolveDimensions + 'a> {
    match config.source {
        DimensionSource::Fixed => Box::new(FixedDimensions(config.fixed())),
        DimensionSource::Server => Box::new(ServiceDimensions(service)),
    }
}
