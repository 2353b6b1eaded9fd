//! Pipeline: lat/lon on a source datum through to a grid reference.
//!
//! source lat/lon -> cartesian -> Helmert -> target lat/lon -> transverse
//! Mercator -> easting/northing -> grid reference. Each stage is also usable
//! on its own; the pipeline just fixes the parameters of the chain.

use log::debug;
use rayon::prelude::*;

use crate::coords::{EastingNorthing, LatLon};
use crate::error::{CoordError, ProjError};
use crate::grid::gridref::{easting_northing_to_grid_ref, GridRef};
use crate::grid::Grid;
use crate::proj::ellipsoid::{Ellipsoid, WGS84};
use crate::proj::geocentric::{lat_lon_to_cartesian, GeocentricSolver};
use crate::proj::helmert::{Helmert, WGS84_TO_OSGB36};
use crate::proj::transverse_mercator::TransverseMercator;
use crate::proj::Projection;

/// A fixed datum shift, projection and grid.
#[derive(Clone, Copy, Debug)]
pub struct Pipeline {
    /// Ellipsoid of incoming lat/lon.
    source: Ellipsoid,
    /// Datum shift from source to the projection's datum, if any.
    helmert: Option<Helmert>,
    projection: TransverseMercator,
    grid: Grid,
    solver: GeocentricSolver,
}

impl Pipeline {
    /// Build a pipeline. The target ellipsoid is the projection's.
    pub fn new(
        source: Ellipsoid,
        helmert: Option<Helmert>,
        projection: TransverseMercator,
        grid: Grid,
    ) -> Result<Self, ProjError> {
        projection.validate()?;
        debug!(
            "pipeline: source a={} b={}, helmert={:?}, target a={} b={}",
            source.a, source.b, helmert, projection.ellipsoid.a, projection.ellipsoid.b
        );
        Ok(Self {
            source,
            helmert,
            projection,
            grid,
            solver: GeocentricSolver::default(),
        })
    }

    /// GPS (WGS84) lat/lon to Ordnance Survey National Grid.
    pub fn wgs84_to_osgb() -> Self {
        Self {
            source: WGS84,
            helmert: Some(WGS84_TO_OSGB36),
            projection: TransverseMercator::NATIONAL_GRID,
            grid: Grid::NATIONAL_GRID,
            solver: GeocentricSolver::default(),
        }
    }

    /// Replace the cartesian -> lat/lon solver settings.
    pub fn with_solver(mut self, solver: GeocentricSolver) -> Self {
        self.solver = solver;
        self
    }

    pub fn projection(&self) -> &TransverseMercator {
        &self.projection
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    fn is_passthrough(&self) -> bool {
        self.helmert.is_none() && self.source == self.projection.ellipsoid
    }

    /// Re-express a source-datum point on the projection's datum.
    pub fn to_target_datum(&self, point: LatLon) -> Result<LatLon, ProjError> {
        if self.is_passthrough() {
            return Ok(point);
        }
        let mut cart = lat_lon_to_cartesian(point, &self.source);
        if let Some(helmert) = &self.helmert {
            cart = helmert.transform(cart);
        }
        self.solver.solve(cart, &self.projection.ellipsoid)
    }

    /// Re-express a projection-datum point on the source datum.
    pub fn to_source_datum(&self, point: LatLon) -> Result<LatLon, ProjError> {
        if self.is_passthrough() {
            return Ok(point);
        }
        let mut cart = lat_lon_to_cartesian(point, &self.projection.ellipsoid);
        if let Some(helmert) = &self.helmert {
            cart = helmert.inverse().transform(cart);
        }
        self.solver.solve(cart, &self.source)
    }

    /// Source lat/lon -> easting/northing.
    pub fn to_easting_northing(&self, point: LatLon) -> Result<EastingNorthing, ProjError> {
        let target = self.to_target_datum(point)?;
        Ok(self.projection.forward(target))
    }

    /// Source lat/lon -> grid reference.
    pub fn to_grid_ref(&self, point: LatLon) -> Result<GridRef, CoordError> {
        let en = self.to_easting_northing(point)?;
        Ok(easting_northing_to_grid_ref(en, &self.grid)?)
    }

    /// Easting/northing -> source lat/lon.
    pub fn from_easting_northing(&self, point: EastingNorthing) -> Result<LatLon, ProjError> {
        let target = self.projection.inverse(point)?;
        self.to_source_datum(target)
    }

    /// Batch source lat/lon -> easting/northing, parallel over points.
    pub fn to_easting_northing_batch(
        &self,
        points: &[LatLon],
    ) -> Result<Vec<EastingNorthing>, ProjError> {
        points
            .par_iter()
            .map(|&p| self.to_easting_northing(p))
            .collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::wgs84_to_osgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;
    use crate::proj::ellipsoid::AIRY_1830;
    use approx::assert_relative_eq;

    #[test]
    fn test_greenwich_wgs84_to_grid_ref() {
        let pipe = Pipeline::wgs84_to_osgb();
        let p = LatLon::from_degrees(51.4778, -0.0014, 0.0);
        let en = pipe.to_easting_northing(p).unwrap();
        assert_relative_eq!(en.e, 538_890.10, epsilon = 0.01);
        assert_relative_eq!(en.n, 177_320.50, epsilon = 0.01);
        // Helmert shift moves ellipsoidal height onto Airy
        assert_relative_eq!(en.h, -45.90, epsilon = 0.01);

        let gr = pipe.to_grid_ref(p).unwrap();
        assert_eq!(gr.to_string(), "TQ 38890 77320");
    }

    #[test]
    fn test_datum_shift_applied() {
        let pipe = Pipeline::wgs84_to_osgb();
        let shifted = pipe
            .to_target_datum(LatLon::from_degrees(52.65757, 1.71791, 0.0))
            .unwrap();
        let (lat, lon) = shifted.to_degrees();
        assert_relative_eq!(lat, 52.657_161_6, epsilon = 1e-6);
        assert_relative_eq!(lon, 1.719_779_8, epsilon = 1e-6);
    }

    #[test]
    fn test_passthrough_matches_projection() {
        let pipe = Pipeline::new(
            AIRY_1830,
            None,
            TransverseMercator::NATIONAL_GRID,
            Grid::NATIONAL_GRID,
        )
        .unwrap();
        let p = LatLon::from_degrees(52.65757, 1.71791, 3.0);
        assert_eq!(
            pipe.to_easting_northing(p).unwrap(),
            TransverseMercator::NATIONAL_GRID.forward(p)
        );
    }

    #[test]
    fn test_roundtrip_through_grid() {
        let pipe = Pipeline::wgs84_to_osgb();
        for &(lat, lon) in &[(51.4778, -0.0014), (57.0, -4.0), (50.4, -4.1)] {
            let p = LatLon::from_degrees(lat, lon, 50.0);
            let en = pipe.to_easting_northing(p).unwrap();
            let q = pipe.from_easting_northing(en).unwrap();
            let (lat2, lon2) = q.to_degrees();
            assert_relative_eq!(lat2, lat, epsilon = 1e-6);
            assert_relative_eq!(lon2, lon, epsilon = 1e-6);
            assert_relative_eq!(q.h, 50.0, epsilon = 0.05);
        }
    }

    #[test]
    fn test_outside_grid_is_error() {
        let pipe = Pipeline::wgs84_to_osgb();
        // Paris projects south of the false origin
        let r = pipe.to_grid_ref(LatLon::from_degrees(48.85, 2.35, 0.0));
        assert!(matches!(
            r,
            Err(CoordError::Grid(GridError::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn test_rejects_bad_projection() {
        let mut tm = TransverseMercator::NATIONAL_GRID;
        tm.f0 = -1.0;
        assert!(Pipeline::new(WGS84, Some(WGS84_TO_OSGB36), tm, Grid::NATIONAL_GRID).is_err());
    }

    #[test]
    fn test_solver_cap_surfaces() {
        let pipe = Pipeline::wgs84_to_osgb().with_solver(GeocentricSolver::new(1e-9, 1));
        let r = pipe.to_easting_northing(LatLon::from_degrees(53.0, -1.0, 0.0));
        assert!(matches!(r, Err(ProjError::NoConvergence { .. })));
    }

    #[test]
    fn test_batch_matches_single() {
        let pipe = Pipeline::wgs84_to_osgb();
        let points: Vec<LatLon> = (0..64)
            .map(|i| LatLon::from_degrees(50.5 + i as f64 * 0.1, -4.0 + i as f64 * 0.05, 0.0))
            .collect();
        let batch = pipe.to_easting_northing_batch(&points).unwrap();
        for (p, en) in points.iter().zip(&batch) {
            assert_eq!(*en, pipe.to_easting_northing(*p).unwrap());
        }
    }
}
