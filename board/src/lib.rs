//! Board state for a game of checkers
//!
//! This crate owns everything that describes a position: the squares, the pieces on them, and the
//! rules for checking whether a single proposed move is legal. Turn order lives in `backend`.

use core::fmt;

mod checkerboard;
mod moves;
mod piece;
mod validator;

pub use crate::checkerboard::{Board, Square};
pub use crate::moves::Move;
pub use crate::piece::{Piece, PieceId};
pub use crate::validator::Validator;

/// The number of squares along each side of the board
pub const BOARD_SIZE: i8 = 8;

/// The colors a piece (or a square) can have
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    /// Both colors, in the order they move
    pub const COLORS: [Color; 2] = [Self::White, Self::Black];

    pub const fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub const fn is_black(self) -> bool {
        match self {
            Color::White => false,
            Color::Black => true,
        }
    }

    pub const fn is_white(self) -> bool {
        match self {
            Color::White => true,
            Color::Black => false,
        }
    }

    /// The change in row for a piece of this color moving forward
    ///
    /// Black starts on rows 1-3 and moves towards row 8, white moves the other way.
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "WHITE",
            Color::Black => "BLACK",
        })
    }
}

/// A coordinate on the board
///
/// `x` is the column and `y` is the row, both 1-based. Any pair of integers can be stored so that
/// user input can be represented before it is checked; use [`Position::is_on_board`] or
/// [`Board::square_at`] to find out whether it names a real square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}
impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Returns if this position lies within the 8x8 board
    pub const fn is_on_board(self) -> bool {
        1 <= self.x && self.x <= BOARD_SIZE && 1 <= self.y && self.y <= BOARD_SIZE
    }

    /// The index of this position into a row-major array of squares, if it is on the board
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(((self.y - 1) * BOARD_SIZE + (self.x - 1)) as usize)
        } else {
            None
        }
    }

    /// The inverse of [`Self::index`]
    ///
    /// `index` must be less than 64.
    pub const fn from_index(index: usize) -> Self {
        debug_assert!(index < 64);
        Self {
            x: (index % 8) as i8 + 1,
            y: (index / 8) as i8 + 1,
        }
    }

    /// Shift this position by the given number of columns and rows
    ///
    /// The result may be off the board.
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// The `(dx, dy)` needed to get from `self` to `other`
    pub const fn delta_to(self, other: Self) -> (i8, i8) {
        (
            other.x.saturating_sub(self.x),
            other.y.saturating_sub(self.y),
        )
    }

    /// The color of the square at this position
    ///
    /// Squares where `x + y` is even are black. Only meaningful for positions on the board.
    pub const fn square_color(self) -> Color {
        if (self.x as i16 + self.y as i16) % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    /// An iterator over every position on the board, row by row
    ///
    /// ```
    /// assert_eq!(board::Position::all_positions().count(), 64);
    /// ```
    pub fn all_positions() -> impl Iterator<Item = Self> {
        (0..64).map(Self::from_index)
    }
}
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A participant in the game
///
/// Both players are created once before the game starts and never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub color: Color,
}
impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}
