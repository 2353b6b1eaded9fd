//! Ordnance Survey coordinate transforms.
//!
//! Ellipsoid <-> geocentric cartesian conversion, seven-parameter Helmert
//! datum shifts, the OSGB transverse Mercator projection and lettered grid
//! references. All operations are pure functions over `Copy` value types.

pub mod coords;
pub mod error;
pub mod grid;
pub mod proj;
#[cfg(feature = "python")]
mod py;

pub use coords::{Cartesian, EastingNorthing, LatLon};
pub use error::{CoordError, GridError, ProjError};
pub use grid::gridref::{easting_northing_to_grid_ref, GridRef};
pub use grid::Grid;
pub use proj::ellipsoid::Ellipsoid;
pub use proj::geocentric::{cartesian_to_lat_lon, lat_lon_to_cartesian, GeocentricSolver};
pub use proj::helmert::{helmert_transform, Helmert};
pub use proj::pipeline::Pipeline;
pub use proj::transverse_mercator::{lat_lon_to_easting_northing, TransverseMercator};
pub use proj::Projection;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn os_coord(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
