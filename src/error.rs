use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoordError {
    #[error("Projection error: {0}")]
    Projection(#[from] ProjError),

    #[error("Grid reference error: {0}")]
    Grid(#[from] GridError),
}

#[derive(Error, Debug, PartialEq)]
pub enum ProjError {
    #[error("Failed to converge after {iterations} iterations")]
    NoConvergence { iterations: usize },

    #[error("Non-finite coordinate: {0}")]
    NonFinite(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum GridError {
    #[error("Point ({easting}, {northing}) lies outside the grid")]
    OutOfBounds { easting: f64, northing: f64 },

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Invalid precision: {0} digits (expected an even number from 0 to 10)")]
    InvalidPrecision(usize),
}
