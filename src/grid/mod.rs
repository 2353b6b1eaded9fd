//! Lettered national grid layout and grid-reference encoding.

pub mod gridref;
pub mod letters;

use crate::error::GridError;
use letters::{index_x, index_y, letter_to_index, BLOCK};

/// Side of one lettered grid square (metres).
pub const SQUARE_SIZE: f64 = 100_000.0;

/// Most letters a grid code may carry.
pub const MAX_DIGITS: usize = 6;

/// Layout of a lettered grid: its extent in 100 km squares and how those
/// squares are named.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    num_digits: usize,
    bottom_left_first_char: char,
}

impl Grid {
    /// Ordnance Survey National Grid: 700 km × 1300 km, two letters, false origin in 'SV'.
    pub const NATIONAL_GRID: Grid = Grid {
        width: 7,
        height: 13,
        num_digits: 2,
        bottom_left_first_char: 'S',
    };

    /// Build and validate a grid.
    ///
    /// `bottom_left_first_char` is the outermost letter of the square at grid
    /// origin (0, 0). Every square in `width` × `height` must receive a valid
    /// code: the letter must be A–Z other than 'I', and the outermost digit
    /// plus the letter's offset must stay inside its 5×5 block.
    pub fn new(
        width: u32,
        height: u32,
        num_digits: usize,
        bottom_left_first_char: char,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidGrid(format!(
                "grid must have at least one square, got {width}x{height}"
            )));
        }
        if num_digits == 0 || num_digits > MAX_DIGITS {
            return Err(GridError::InvalidGrid(format!(
                "num_digits must be 1..={MAX_DIGITS}, got {num_digits}"
            )));
        }
        let first = letter_to_index(bottom_left_first_char).ok_or_else(|| {
            GridError::InvalidGrid(format!(
                "first character must be A-Z excluding I, got {bottom_left_first_char:?}"
            ))
        })?;

        // u64 so oversized extents fail the check instead of overflowing
        let outer = u64::from(BLOCK.pow(num_digits as u32 - 1));
        let top_x = u64::from(width - 1) / outer + u64::from(index_x(first));
        let top_y = u64::from(height - 1) / outer + u64::from(index_y(first));
        if top_x >= u64::from(BLOCK) || top_y >= u64::from(BLOCK) {
            return Err(GridError::InvalidGrid(format!(
                "{width}x{height} squares starting at {bottom_left_first_char:?} \
                 overflow {num_digits} letter(s)"
            )));
        }

        Ok(Self {
            width,
            height,
            num_digits,
            bottom_left_first_char,
        })
    }

    /// Width in 100 km squares.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in 100 km squares.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Letters per grid code.
    pub fn num_digits(&self) -> usize {
        self.num_digits
    }

    pub fn bottom_left_first_char(&self) -> char {
        self.bottom_left_first_char
    }

    /// 100 km square indices of (e, n), or `None` when outside the grid.
    pub fn square_of(&self, e: f64, n: f64) -> Option<(u32, u32)> {
        let sq_x = (e / SQUARE_SIZE).floor();
        let sq_y = (n / SQUARE_SIZE).floor();
        // NaN fails both comparisons
        let in_x = sq_x >= 0.0 && sq_x < self.width as f64;
        let in_y = sq_y >= 0.0 && sq_y < self.height as f64;
        if in_x && in_y {
            Some((sq_x as u32, sq_y as u32))
        } else {
            None
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::NATIONAL_GRID
    }
}
