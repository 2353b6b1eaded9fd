//! PyO3 bindings for WGS84 -> National Grid conversion.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::coords::{EastingNorthing, LatLon};
use crate::grid::gridref::easting_northing_to_grid_ref;
use crate::grid::Grid;
use crate::proj::pipeline::Pipeline;

/// Convert arrays of WGS84 coordinates to OSGB36 National Grid.
///
/// Args:
///     lat: 1D array of latitudes (degrees).
///     lon: 1D array of longitudes (degrees).
///
/// Returns:
///     Tuple of (easting, northing) arrays in metres.
#[pyfunction]
#[pyo3(signature = (lat, lon))]
#[allow(clippy::type_complexity)]
pub fn wgs84_to_osgb<'py>(
    py: Python<'py>,
    lat: PyReadonlyArray1<'py, f64>,
    lon: PyReadonlyArray1<'py, f64>,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let lat_view = lat.as_array();
    let lon_view = lon.as_array();

    let n = lat_view.len();
    let lon_len = lon_view.len();
    if n != lon_len {
        return Err(PyValueError::new_err(format!(
            "lat and lon must have same length, got {} and {}",
            n, lon_len
        )));
    }

    let points: Vec<LatLon> = lat_view
        .iter()
        .zip(lon_view.iter())
        .map(|(&la, &lo)| LatLon::from_degrees(la, lo, 0.0))
        .collect();

    let projected = py.allow_threads(move || {
        Pipeline::wgs84_to_osgb()
            .to_easting_northing_batch(&points)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    })?;

    let (es, ns): (Vec<f64>, Vec<f64>) = projected.into_iter().map(|en| (en.e, en.n)).unzip();

    Ok((
        PyArray1::from_owned_array(py, ndarray::Array1::from(es)),
        PyArray1::from_owned_array(py, ndarray::Array1::from(ns)),
    ))
}

/// Format a National Grid easting/northing as a grid reference string.
///
/// Args:
///     easting: Easting in metres.
///     northing: Northing in metres.
///     digits: Total numeric digits (0, 2, ..., 10).
///
/// Returns:
///     Grid reference such as "TG 51409 13177".
#[pyfunction]
#[pyo3(signature = (easting, northing, digits=10))]
pub fn grid_ref(easting: f64, northing: f64, digits: usize) -> PyResult<String> {
    let gr = easting_northing_to_grid_ref(
        EastingNorthing::new(easting, northing, 0.0),
        &Grid::NATIONAL_GRID,
    )
    .map_err(|e| PyValueError::new_err(e.to_string()))?;
    gr.format(digits)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}
