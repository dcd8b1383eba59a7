use crate::{Color, Position};

/// A stable handle for a piece on a [`Board`](crate::Board)
///
/// Handles are indices into the board's piece arena. They stay valid for the whole game, even
/// after the piece is captured, so two pieces with the same color and position are never
/// confused.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub(crate) u8);
impl PieceId {
    /// The index of this piece in the arena
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A piece
///
/// Pieces are owned by the board, which keeps `position` in sync with the square that holds the
/// piece. Captured pieces keep the position they were taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub(crate) position: Position,
    pub(crate) captured: bool,
}
impl Piece {
    pub(crate) const fn new(color: Color, position: Position) -> Self {
        Self {
            color,
            position,
            captured: false,
        }
    }

    /// Where this piece is (or was, if captured)
    pub const fn position(&self) -> Position {
        self.position
    }

    pub const fn is_captured(&self) -> bool {
        self.captured
    }

    /// The letter drawn for this piece when rendering the board
    pub const fn marker(&self) -> char {
        match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}
