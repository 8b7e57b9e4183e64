//! The problem entity: parsing input records, canonicalization and the two
//! serialized views.
//!
//! Input records are JSON objects of the form
//!
//! ```text
//! {"SZ": "19", "AB": ["cb", "db"], "AW": ["bb"], "SOL": [["B", "ba", "Correct.", ""]]}
//! ```
//!
//! `SOL` lists the recorded correct moves; only the player and coordinate of
//! each entry are read.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::board::{Board, Color};
use crate::constants::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{Error, Result};
use crate::tree::SolutionTree;

/// `SZ` appears both as a string and as a number in the wild.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SizeField {
    Number(i64),
    Float(f64),
    Text(String),
}

impl SizeField {
    fn value(&self) -> Result<i64> {
        match self {
            SizeField::Number(n) => Ok(*n),
            SizeField::Float(f) if f.is_finite() && f.fract() == 0.0 => Ok(*f as i64),
            SizeField::Float(f) => Err(Error::MalformedField {
                field: "SZ".to_string(),
                value: f.to_string(),
            }),
            SizeField::Text(s) => s.trim().parse().map_err(|_| Error::MalformedField {
                field: "SZ".to_string(),
                value: s.clone(),
            }),
        }
    }
}

/// A raw problem file. Every field is optional here so that absent fields
/// surface as [`Error::MissingField`] rather than a generic parse error.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct InputRecord {
    #[serde(rename = "SZ")]
    pub size: Option<SizeField>,
    #[serde(rename = "AB")]
    pub black: Option<Vec<String>>,
    #[serde(rename = "AW")]
    pub white: Option<Vec<String>>,
    #[serde(rename = "SOL")]
    pub solution: Option<Vec<Vec<Value>>>,
}

/// Field `index` of solution entry `entry`, which must be a string. Fields
/// past the coordinate are never looked at.
fn move_field(solution: &[Vec<Value>], entry: usize, index: usize) -> Result<&str> {
    let field = || format!("SOL[{entry}][{index}]");
    let value = solution[entry]
        .get(index)
        .ok_or_else(|| Error::MissingField { field: field() })?;
    value.as_str().ok_or_else(|| Error::MalformedField {
        field: field(),
        value: value.to_string(),
    })
}

fn require<'a, T>(field: &'a Option<T>, name: &str) -> Result<&'a T> {
    field.as_ref().ok_or_else(|| Error::MissingField {
        field: name.to_string(),
    })
}

/// One entry of the output corpus.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    pub name: String,
    pub board: String,
    pub tree: SolutionTree,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    pub name: String,
    pub size: usize,
    pub board: Board,
    pub next_player: Color,
    pub tree: SolutionTree,
}

fn check_size(size: i64) -> Result<usize> {
    usize::try_from(size)
        .ok()
        .filter(|s| (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(s))
        .ok_or(Error::InvalidBoardSize { size })
}

impl Problem {
    /// Build a problem from a parsed input record.
    pub fn from_input(name: impl Into<String>, record: &InputRecord) -> Result<Self> {
        let size = check_size(require(&record.size, "SZ")?.value()?)?;

        let solution = require(&record.solution, "SOL")?;
        if solution.is_empty() {
            return Err(Error::EmptySolution);
        }
        let next_player = Color::from_player(move_field(solution, 0, 0)?)?;

        let board = Board::from_placements(
            size,
            require(&record.black, "AB")?,
            require(&record.white, "AW")?,
        )?;

        let moves = (0..solution.len())
            .map(|i| move_field(solution, i, 1))
            .collect::<Result<Vec<_>>>()?;
        let tree = SolutionTree::build(&moves)?;

        Ok(Problem {
            name: name.into(),
            size,
            board,
            next_player,
            tree,
        })
    }

    /// Parse the JSON text of a problem file and build the problem.
    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self> {
        let record: InputRecord = serde_json::from_str(json)?;
        Self::from_input(name, &record)
    }

    /// A copy with black and white exchanged, on the board and in
    /// `next_player`. Tree moves name points only, so the tree is kept.
    pub fn swap_colours(&self) -> Self {
        Problem {
            name: self.name.clone(),
            size: self.size,
            board: self.board.swap_colours(),
            next_player: self.next_player.swap(),
            tree: self.tree.clone(),
        }
    }

    /// Ensure black is to play, swapping colours if needed.
    pub fn into_black_to_play(self) -> Self {
        match self.next_player {
            Color::Black => self,
            Color::White => self.swap_colours(),
        }
    }

    /// Player code on the first line, then one line of cell codes per row.
    pub fn render_board_text(&self) -> String {
        format!("{}\n{}", self.next_player.code(), self.board)
    }

    pub fn to_record(&self) -> ProblemRecord {
        ProblemRecord {
            name: self.name.clone(),
            board: self.render_board_text(),
            tree: self.tree.clone(),
        }
    }

    /// Rebuild a problem from an output record.
    pub fn from_record(record: &ProblemRecord) -> Result<Self> {
        let mut lines = record.board.split('\n');
        let player_line = lines.next().unwrap_or_default();
        let next_player = match player_line.chars().collect::<Vec<_>>().as_slice() {
            [c] => Color::from_code(*c),
            _ => None,
        }
        .ok_or_else(|| Error::InvalidBoardText {
            reason: format!("invalid next player line '{player_line}'"),
        })?;

        let board = Board::from_rows(lines)?;
        let size = check_size(board.size as i64)?;
        record.tree.check_fits(size)?;

        Ok(Problem {
            name: record.name.clone(),
            size,
            board,
            next_player,
            tree: record.tree.clone(),
        })
    }
}
