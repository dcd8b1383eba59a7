use crate::{Board, Move, Piece, Player};

/// Checks proposed moves against the rules
///
/// The validator only reads the board. Moves are single diagonal steps or jumps, so there is no
/// path to scan: every check is arithmetic on the endpoints plus an occupancy lookup.
#[derive(Clone, Copy, Debug)]
pub struct Validator<'a> {
    board: &'a Board,
}

impl<'a> Validator<'a> {
    pub const fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Whether `mv` is a legal simple move
    ///
    /// The destination must be one row forward for the piece's color and one column to either
    /// side. Whether the destination exists and is empty is left to the caller.
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        let (dx, dy) = mv.from.delta_to(mv.to);
        dy == mv.color.forward() && dx.unsigned_abs() == 1
    }

    /// Whether `mv` is a legal capture
    ///
    /// The destination must be an empty square and the caller must already have found the piece
    /// being jumped (see [`Move::resolve`]).
    pub fn is_valid_capture(&self, mv: &Move) -> bool {
        let Some(target) = self.board.square_at(mv.to) else {
            return false;
        };
        !target.is_occupied() && mv.captured.is_some()
    }

    pub fn piece_belongs_to_player(&self, piece: &Piece, player: &Player) -> bool {
        piece.color == player.color
    }
}
