pub mod common;
pub mod ellipsoid;
pub mod geocentric;
pub mod helmert;
pub mod pipeline;
pub mod transverse_mercator;

use rayon::prelude::*;

use crate::coords::{EastingNorthing, LatLon};
use crate::error::ProjError;

/// Trait for map projections supporting forward and inverse transforms.
pub trait Projection: Send + Sync {
    /// Forward: geodetic (radians) -> easting/northing (metres). Total for finite input.
    fn forward(&self, point: LatLon) -> EastingNorthing;

    /// Inverse: easting/northing (metres) -> geodetic (radians).
    fn inverse(&self, point: EastingNorthing) -> Result<LatLon, ProjError>;

    /// Batch forward transform, parallel over points.
    fn forward_batch(&self, points: &[LatLon]) -> Vec<EastingNorthing> {
        points.par_iter().map(|&p| self.forward(p)).collect()
    }

    /// Batch inverse transform. Fails on the first point that fails.
    fn inverse_batch(&self, points: &[EastingNorthing]) -> Result<Vec<LatLon>, ProjError> {
        points.par_iter().map(|&p| self.inverse(p)).collect()
    }

    fn ellipsoid(&self) -> &ellipsoid::Ellipsoid;
}
