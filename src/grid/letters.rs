//! Letter arithmetic for 5×5 grid-square blocks.
//!
//! Squares are lettered A–Z without I, row-major from the top-left, so index 0
//! is 'A' at the top-left and index 24 is 'Z' at the bottom-right. Column x
//! counts from the left and row y counts up from the bottom.

/// Side length of a lettered block.
pub const BLOCK: u32 = 5;

/// Letter of block index `i` (0..25), skipping 'I'.
pub fn index_to_letter(i: u32) -> Option<char> {
    if i >= BLOCK * BLOCK {
        return None;
    }
    let offset = if i >= 8 { i + 1 } else { i };
    char::from_u32('A' as u32 + offset)
}

/// Block index of an upper-case letter. 'I' and anything outside A–Z has none.
pub fn letter_to_index(c: char) -> Option<u32> {
    match c {
        'A'..='H' => Some(c as u32 - 'A' as u32),
        'J'..='Z' => Some(c as u32 - 'A' as u32 - 1),
        _ => None,
    }
}

/// Column of block index `i`.
pub fn index_x(i: u32) -> u32 {
    i % BLOCK
}

/// Row of block index `i`, counted from the bottom.
pub fn index_y(i: u32) -> u32 {
    (BLOCK - 1) - i / BLOCK
}

/// Block index of column `x`, row `y` (from the bottom). Both must be below 5.
pub fn xy_to_index(x: u32, y: u32) -> u32 {
    x + ((BLOCK - 1) - y) * BLOCK
}
