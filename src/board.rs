use std::fmt;

use crate::constants::{CODE_BLACK, CODE_EMPTY, CODE_WHITE};
use crate::coord::decode_positional;
use crate::error::{Error, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other player.
    pub fn swap(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn code(self) -> char {
        match self {
            Color::Black => CODE_BLACK,
            Color::White => CODE_WHITE,
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        match c {
            CODE_BLACK => Some(Color::Black),
            CODE_WHITE => Some(Color::White),
            _ => None,
        }
    }

    /// Parse a player designation from an input record ("B", "white", ...).
    ///
    /// Only the first character counts, case-insensitively.
    pub fn from_player(player: &str) -> Result<Self> {
        player
            .chars()
            .next()
            .and_then(|c| Color::from_code(c.to_ascii_lowercase()))
            .ok_or_else(|| Error::InvalidPlayer {
                player: player.to_string(),
            })
    }
}

/// Swap the colour of a board cell. Empty cells stay empty.
pub fn swap_cell(cell: Option<Color>) -> Option<Color> {
    cell.map(Color::swap)
}

fn cell_code(cell: Option<Color>) -> char {
    cell.map_or(CODE_EMPTY, Color::code)
}

/// A square grid of cells, indexed by zero-based `(row, col)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build the initial position from positional stone codes.
    ///
    /// Black stones go down first, then white; a point listed twice ends up
    /// with the last colour written.
    pub fn from_placements<B, W>(size: usize, black: B, white: W) -> Result<Self>
    where
        B: IntoIterator,
        B::Item: AsRef<str>,
        W: IntoIterator,
        W::Item: AsRef<str>,
    {
        let mut board = Board::new(size);
        board.add_stones(black, Color::Black)?;
        board.add_stones(white, Color::White)?;
        Ok(board)
    }

    fn add_stones<I>(&mut self, positions: I, color: Color) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for code in positions {
            let (row, col) = decode_positional(code.as_ref())?;
            self.set(row, col, Some(color))?;
        }
        Ok(())
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[self.idx(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Option<Color>) -> Result<()> {
        if row >= self.size || col >= self.size {
            return Err(Error::CoordinateOutOfRange {
                row,
                col,
                limit: self.size,
            });
        }
        let i = self.idx(row, col);
        self.cells[i] = cell;
        Ok(())
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Color>]> + '_ {
        self.cells.chunks(self.size.max(1))
    }

    /// A copy of this board with black and white exchanged.
    pub fn swap_colours(&self) -> Self {
        Self {
            size: self.size,
            cells: self.cells.iter().copied().map(swap_cell).collect(),
        }
    }

    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    /// Parse the row lines of a board text (without the player line).
    pub fn from_rows<'a, I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let rows: Vec<&str> = rows.into_iter().collect();
        let size = rows.len();
        let mut board = Board::new(size);
        for (row, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != size {
                return Err(Error::InvalidBoardText {
                    reason: format!("row {} has width {width}, expected {size}", row + 1),
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    CODE_EMPTY => None,
                    c => Some(Color::from_code(c).ok_or_else(|| Error::InvalidBoardText {
                        reason: format!("invalid cell '{c}' at row {}, col {}", row + 1, col + 1),
                    })?),
                };
                board.set(row, col, cell)?;
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// One line per row, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", cell_code(cell))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_swap_color() {
        assert_eq!(Color::Black.swap(), Color::White);
        assert_eq!(Color::White.swap(), Color::Black);
        for c in [Color::Black, Color::White] {
            assert_eq!(c.swap().swap(), c);
        }
        assert_eq!(swap_cell(None), None);
        assert_eq!(swap_cell(Some(Color::Black)), Some(Color::White));
    }

    #[test]
    fn test_from_player() {
        assert_eq!(Color::from_player("B").unwrap(), Color::Black);
        assert_eq!(Color::from_player("black").unwrap(), Color::Black);
        assert_eq!(Color::from_player("W").unwrap(), Color::White);
        assert!(matches!(
            Color::from_player("x"),
            Err(Error::InvalidPlayer { player }) if player == "x"
        ));
        assert!(matches!(
            Color::from_player(""),
            Err(Error::InvalidPlayer { .. })
        ));
    }

    #[test]
    fn test_empty_boards_all_sizes() {
        for size in 2..=25 {
            let board = Board::from_placements(size, NONE, NONE).unwrap();
            assert_eq!(board.size, size);
            assert_eq!(board.rows().count(), size);
            for row in board.rows() {
                assert_eq!(row.len(), size);
                assert!(row.iter().all(Option::is_none));
            }
        }
    }

    #[test]
    fn test_placements() {
        let board = Board::from_placements(5, ["ab", "cc"], ["ea"]).unwrap();
        // "ab": column 0, row 1
        assert_eq!(board.get(1, 0), Some(Color::Black));
        assert_eq!(board.get(2, 2), Some(Color::Black));
        assert_eq!(board.get(0, 4), Some(Color::White));
        assert_eq!(board.get(0, 0), None);
        assert_eq!(board.count(Color::Black), 2);
        assert_eq!(board.count(Color::White), 1);
    }

    #[test]
    fn test_white_overwrites_black() {
        let board = Board::from_placements(3, ["bb"], ["bb"]).unwrap();
        assert_eq!(board.get(1, 1), Some(Color::White));
    }

    #[test]
    fn test_placement_out_of_bounds() {
        let err = Board::from_placements(3, ["dd"], NONE).unwrap_err();
        assert!(matches!(
            err,
            Error::CoordinateOutOfRange { row: 3, col: 3, limit: 3 }
        ));
    }

    #[test]
    fn test_placement_invalid_code() {
        let err = Board::from_placements(9, ["a"], NONE).unwrap_err();
        assert!(matches!(err, Error::InvalidCoordinate { .. }));
    }

    #[test]
    fn test_display_and_parse() {
        let board = Board::from_placements(3, ["aa"], ["cb"]).unwrap();
        let text = board.to_string();
        assert_eq!(text, "b..\n..w\n...");
        assert_eq!(Board::from_rows(text.lines()).unwrap(), board);
    }

    #[test]
    fn test_swap_colours_twice() {
        let board = Board::from_placements(4, ["aa", "bb"], ["cc"]).unwrap();
        let swapped = board.swap_colours();
        assert_eq!(swapped.get(0, 0), Some(Color::White));
        assert_eq!(swapped.get(2, 2), Some(Color::Black));
        assert_eq!(swapped.get(3, 3), None);
        assert_eq!(swapped.swap_colours(), board);
    }

    #[test]
    fn test_from_rows_rejects_bad_text() {
        assert!(Board::from_rows(["..", "."]).is_err());
        assert!(Board::from_rows(["..", ".x"]).is_err());
        assert!(Board::from_rows(["...", "..."]).is_err());
    }
}
