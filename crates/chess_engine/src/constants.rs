//! # Chess Engine Constants - Board Geometry & Rule Parameters
//!
//! ## Board Coordinates
//!
//! The board is an 8x8 grid addressed by `(row, col)`:
//! - **Row 0** is Black's back rank, **row 7** is White's back rank
//! - **Col 0** is the a-file, **col 7** is the h-file
//!
//! White pawns therefore advance towards row 0 (direction -1) and black pawns
//! towards row 7 (direction +1).
//!
//! ## Direction Vectors
//!
//! Movement is encoded as `(d_row, d_col)` offsets. Sliding pieces repeat an
//! offset until they leave the board or hit a piece; knights and kings apply
//! each offset once.
//!
//! ## Rule Parameters
//!
//! - Clock input is accepted in whole minutes between [`MIN_CLOCK_MINUTES`] and
//!   [`MAX_CLOCK_MINUTES`].
//! - [`DEFAULT_FIFTY_MOVE_THRESHOLD`] is compared directly against the
//!   half-move clock. Standard chess waits for 100 half-moves; the default
//!   keeps the threshold of 50 and can be changed through
//!   [`RuleOptions`](crate::game_state::RuleOptions).

/// Number of rows and columns on the board
pub const BOARD_SIZE: u8 = 8;

/// Column of both kings in the initial position
pub const KING_HOME_COL: u8 = 4;

/// Column of the queen-side rook in the initial position
pub const QUEEN_SIDE_ROOK_COL: u8 = 0;

/// Column of the king-side rook in the initial position
pub const KING_SIDE_ROOK_COL: u8 = 7;

/// Orthogonal directions (rook, queen)
pub const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal directions (bishop, queen)
pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All eight directions (queen, king)
pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Knight "L-shape" offsets
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Smallest accepted per-side clock, in minutes
pub const MIN_CLOCK_MINUTES: i64 = 1;

/// Largest accepted per-side clock, in minutes
pub const MAX_CLOCK_MINUTES: i64 = 180;

/// Seconds removed from the side to move on every clock tick
pub const SECONDS_PER_TICK: u32 = 1;

/// Half-move clock value at which the game is drawn for inactivity
pub const DEFAULT_FIFTY_MOVE_THRESHOLD: u32 = 50;
