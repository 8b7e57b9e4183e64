//! Error types for the converter.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while converting a problem or encoding the
/// corpus.
///
/// Most variants are per-record: the pipeline records them and moves on.
/// [`Error::UnrecognizedOutputFormat`] and [`Error::UnencodableSqlText`] abort
/// the whole run.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board size must be between 2 and 25; was {size}")]
    InvalidBoardSize { size: i64 },

    #[error("next player must be 'b' or 'w'; was '{player}'")]
    InvalidPlayer { player: String },

    #[error("coordinates must be two characters [a-z]; was \"{coords}\"")]
    InvalidCoordinate { coords: String },

    #[error("row or column index out of bounds; was row = {row}, col = {col} (limit {limit})")]
    CoordinateOutOfRange { row: usize, col: usize, limit: usize },

    #[error("missing field '{field}'")]
    MissingField { field: String },

    #[error("malformed field '{field}': {value}")]
    MalformedField { field: String, value: String },

    #[error("solution sequence is empty")]
    EmptySolution,

    #[error("invalid board text: {reason}")]
    InvalidBoardText { reason: String },

    #[error("invalid solution tree: {reason}")]
    InvalidTree { reason: String },

    #[error("text for column '{column}' cannot be written as an SQL literal: {reason}")]
    UnencodableSqlText { column: String, reason: String },

    #[error("unrecognized output format '{format}' (expected 'json' or 'sql')")]
    UnrecognizedOutputFormat { format: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
