//! Tsumego-Convert: turn a library of Go life-and-death problems into one
//! dataset for the viewer.
//!
//! Each problem file holds a board size, the initial stones and the recorded
//! correct sequence. Problems are normalized so that black is always to play,
//! the sequence becomes a single-line solution tree, and the corpus is written
//! as a JSON document or an SQL upsert script.
//!
//! ## Modules
//!
//! - [`constants`] - Board bounds, coordinate alphabet and defaults
//! - [`coord`] - Positional and display coordinate conversion
//! - [`board`] - Stone colours and the board grid
//! - [`tree`] - Solution trees and their JSON form
//! - [`problem`] - Input records, canonicalization and output records
//! - [`output`] - JSON and SQL encoders
//! - [`pipeline`] - File discovery and the conversion run
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use tsumego_convert::board::Color;
//! use tsumego_convert::problem::Problem;
//!
//! let json = r#"{"SZ": "3", "AB": ["aa"], "AW": ["bb"], "SOL": [["W", "cc", "", ""]]}"#;
//! let problem = Problem::from_json("demo", json).unwrap().into_black_to_play();
//!
//! assert_eq!(problem.next_player, Color::Black);
//! assert_eq!(problem.render_board_text(), "b\nw..\n.b.\n...");
//! ```

pub mod board;
pub mod constants;
pub mod coord;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod problem;
pub mod tree;

pub use error::{Error, Result};
