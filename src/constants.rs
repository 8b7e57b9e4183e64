//! Constants for board dimensions, coordinate alphabets and output defaults.
//!
//! Everything here is fixed at compile time; the CLI only overrides the
//! defaults in the last section.

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest board size a problem may declare.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest board size a problem may declare. Also the number of columns the
/// display alphabet can name.
pub const MAX_BOARD_SIZE: usize = 25;

// =============================================================================
// Coordinates
// =============================================================================

/// Column letters for display coordinates. There is no 'I' column, by Go
/// convention, so column 8 is 'J'.
pub const DISPLAY_COLUMNS: &[u8; MAX_BOARD_SIZE] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Exclusive upper bound for rows and columns in display coordinates.
pub const DISPLAY_LIMIT: usize = DISPLAY_COLUMNS.len();

// =============================================================================
// Cell Codes (board text)
// =============================================================================

/// Black stone, and "black to play" on the first line of a board text.
pub const CODE_BLACK: char = 'b';

/// White stone, and "white to play".
pub const CODE_WHITE: char = 'w';

/// Empty point.
pub const CODE_EMPTY: char = '.';

// =============================================================================
// Solution Tree Terminals
// =============================================================================

/// Terminal marking a solved line.
pub const MARKER_WIN: &str = "win";

/// Terminal marking a failed line (only produced by the viewer, never built).
pub const MARKER_LOSE: &str = "lose";

// =============================================================================
// Output
// =============================================================================

/// Key of the problem array in the JSON document.
pub const JSON_PROBLEMS_KEY: &str = "problems";

/// Table the SQL script writes into.
pub const SQL_TABLE: &str = "tsumego";

// =============================================================================
// Run Defaults
// =============================================================================

/// Default root directory scanned for problem files.
pub const DEFAULT_INPUT_DIR: &str = "sanderland-tsumego/problems";

/// Default output path; its extension selects the JSON encoder.
pub const DEFAULT_OUTPUT_FILE: &str = "all_problems.json";

/// Default extension of problem files.
pub const DEFAULT_INPUT_EXTENSION: &str = "json";
