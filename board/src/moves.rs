use crate::{Board, Color, PieceId, Position};

/// A proposed move of one piece
///
/// Moves are built fresh for every attempt and thrown away afterwards, whether or not they were
/// legal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub piece: PieceId,
    /// The color of the moving piece
    pub color: Color,
    /// Where the piece was when the move was built
    pub from: Position,
    pub to: Position,
    /// The opposing piece this move jumps over, if one was found
    pub captured: Option<PieceId>,
}

impl Move {
    /// Build a move of the given piece to `to`, without looking for a piece to capture
    pub fn new(board: &Board, piece: PieceId, to: Position) -> Self {
        let moving = board.piece(piece);
        Self {
            piece,
            color: moving.color,
            from: moving.position(),
            to,
            captured: None,
        }
    }

    /// Build a move of the given piece to `to`, filling in [`Self::captured`] if the move jumps
    /// forward over an opposing piece
    pub fn resolve(board: &Board, piece: PieceId, to: Position) -> Self {
        let mut mv = Self::new(board, piece, to);
        mv.captured = mv
            .jumped_position()
            .and_then(|mid| board.piece_at(mid))
            .filter(|&victim| board.piece(victim).color != mv.color);
        mv
    }

    /// Whether this move is shaped like a capture: two squares diagonally in any direction
    pub const fn is_jump(&self) -> bool {
        let (dx, dy) = self.from.delta_to(self.to);
        dx.unsigned_abs() == 2 && dy.unsigned_abs() == 2
    }

    /// Whether a piece to capture has been found for this move
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// The square jumped over by this move, if it is a forward jump
    ///
    /// Pieces only capture forward, so a jump backwards has no square to capture on.
    pub const fn jumped_position(&self) -> Option<Position> {
        let (_, dy) = self.from.delta_to(self.to);
        if !self.is_jump() || dy != 2 * self.color.forward() {
            return None;
        }
        Some(Position::new(
            (self.from.x + self.to.x) / 2,
            self.from.y + self.color.forward(),
        ))
    }
}
