//! Coordinate conversion between the two notations problems use.
//!
//! - Positional codes (SGF style) name both axes with a letter: `"cd"` is
//!   column 2, row 3. Letters are case-insensitive and zero-based.
//! - Display codes put a column letter in front of a 1-based row number:
//!   `"C4"` is column 2, row 3. Go convention skips the letter 'I', so the
//!   ninth column is 'J'.
//!
//! Everything is expressed as zero-based `(row, col)` pairs in between.

use crate::constants::{DISPLAY_COLUMNS, DISPLAY_LIMIT};
use crate::error::{Error, Result};

/// A point on the board as zero-based `(row, col)`.
pub type Point = (usize, usize);

/// Parse a two-letter positional code (e.g., `"cd"`) into a Point.
///
/// The first letter is the column and the second the row, both counted from
/// 'A'. Anything that is not exactly two ASCII letters is rejected.
pub fn decode_positional(code: &str) -> Result<Point> {
    let bytes = code.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_alphabetic) {
        return Err(Error::InvalidCoordinate {
            coords: code.to_string(),
        });
    }

    let col = (bytes[0].to_ascii_uppercase() - b'A') as usize;
    let row = (bytes[1].to_ascii_uppercase() - b'A') as usize;
    Ok((row, col))
}

/// Convert a Point to a display coordinate (e.g., `"D4"`).
pub fn encode_display(row: usize, col: usize) -> Result<String> {
    if row >= DISPLAY_LIMIT || col >= DISPLAY_LIMIT {
        return Err(Error::CoordinateOutOfRange {
            row,
            col,
            limit: DISPLAY_LIMIT,
        });
    }

    let c = DISPLAY_COLUMNS[col] as char;
    Ok(format!("{c}{}", row + 1))
}

/// Parse a display coordinate (e.g., `"J10"`) into a Point.
///
/// Inverse of [`encode_display`]. The column letter is case-insensitive; 'I'
/// does not name a column.
pub fn decode_display(code: &str) -> Result<Point> {
    let invalid = || Error::InvalidCoordinate {
        coords: code.to_string(),
    };

    let (first, digits) = code.split_at_checked(1).ok_or_else(invalid)?;
    let letter = first.as_bytes()[0].to_ascii_uppercase();
    let col = DISPLAY_COLUMNS
        .iter()
        .position(|&c| c == letter)
        .ok_or_else(invalid)?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) || digits.starts_with('0')
    {
        return Err(invalid());
    }
    let row: usize = digits.parse().map_err(|_| invalid())?;
    if row > DISPLAY_LIMIT {
        return Err(invalid());
    }

    Ok((row - 1, col))
}

/// Convert a positional code straight to its display form.
pub fn positional_to_display(code: &str) -> Result<String> {
    let (row, col) = decode_positional(code)?;
    encode_display(row, col)
}
