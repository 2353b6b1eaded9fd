//! Easting/northing -> lettered grid reference.

use std::fmt;

use crate::coords::EastingNorthing;
use crate::error::GridError;
use crate::grid::letters::{index_to_letter, index_x, index_y, letter_to_index, xy_to_index, BLOCK};
use crate::grid::{Grid, SQUARE_SIZE};

/// A grid reference: square letters plus the offset within that 100 km square.
#[derive(Clone, Debug, PartialEq)]
pub struct GridRef {
    /// Square letters, coarsest first (e.g. "TG").
    pub code: String,
    /// Easting within the square, in [0, 100000) metres.
    pub e: f64,
    /// Northing within the square, in [0, 100000) metres.
    pub n: f64,
    pub h: f64,
}

impl GridRef {
    /// Render with `digits` total numeric digits (0, 2, 4, ..., 10), split
    /// evenly between easting and northing. Offsets are truncated, so the
    /// result names the square the point lies in.
    pub fn format(&self, digits: usize) -> Result<String, GridError> {
        if digits % 2 != 0 || digits > 10 {
            return Err(GridError::InvalidPrecision(digits));
        }
        let per_axis = digits / 2;
        if per_axis == 0 {
            return Ok(self.code.clone());
        }
        let unit = 10f64.powi(5 - per_axis as i32);
        let e = (self.e / unit).floor() as u64;
        let n = (self.n / unit).floor() as u64;
        Ok(format!("{} {:0w$} {:0w$}", self.code, e, n, w = per_axis))
    }
}

impl fmt::Display for GridRef {
    /// Full 1 m resolution, e.g. "TG 51409 13177".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:05} {:05}",
            self.code,
            self.e.floor() as u64,
            self.n.floor() as u64
        )
    }
}

/// Encode `point` as a grid reference on `grid`.
///
/// Fails with `GridError::OutOfBounds` when the point's 100 km square lies
/// outside the grid.
pub fn easting_northing_to_grid_ref(point: EastingNorthing, grid: &Grid) -> Result<GridRef, GridError> {
    let (mut sq_x, mut sq_y) = grid.square_of(point.e, point.n).ok_or(GridError::OutOfBounds {
        easting: point.e,
        northing: point.n,
    })?;

    let first = letter_to_index(grid.bottom_left_first_char()).ok_or_else(|| {
        GridError::InvalidGrid(format!("bad first character {:?}", grid.bottom_left_first_char()))
    })?;

    // Filled finest square first; index 0 is the outermost letter.
    let mut letters = vec!['\0'; grid.num_digits()];
    for i in (0..grid.num_digits()).rev() {
        let (off_x, off_y) = if i == 0 {
            (index_x(first), index_y(first))
        } else {
            (0, 0)
        };
        let index = xy_to_index(off_x + sq_x % BLOCK, off_y + sq_y % BLOCK);
        letters[i] = index_to_letter(index).ok_or_else(|| {
            GridError::InvalidGrid(format!("square index {index} has no letter"))
        })?;
        sq_x /= BLOCK;
        sq_y /= BLOCK;
    }

    Ok(GridRef {
        code: letters.into_iter().collect(),
        e: point.e % SQUARE_SIZE,
        n: point.n % SQUARE_SIZE,
        h: point.h,
    })
}
