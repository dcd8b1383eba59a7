use core::fmt;

use crate::{Color, Piece, PieceId, Position, BOARD_SIZE};

/// A view of a single square on the board
///
/// Squares can only be obtained from a [`Board`], so holding one proves that its position is on
/// the board. The occupant is a snapshot taken when the square was looked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Square {
    position: Position,
    color: Color,
    piece: Option<PieceId>,
}
impl Square {
    pub const fn position(&self) -> Position {
        self.position
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn piece(&self) -> Option<PieceId> {
        self.piece
    }

    pub const fn is_occupied(&self) -> bool {
        self.piece.is_some()
    }
}

/// The state of the board: which piece, if any, is on each square
///
/// The board owns every piece in an arena addressed by [`PieceId`] and keeps a row-major array
/// from square to occupant. Only the board mutates occupancy, so a piece's recorded position and
/// the square pointing back at it always agree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<PieceId>; 64],
    pieces: Vec<Piece>,
}

impl Board {
    /// The number of pieces each side starts with
    pub const PIECES_PER_SIDE: usize = 12;

    /// A board with no pieces on it
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
            pieces: Vec::new(),
        }
    }

    /// The board at the start of a game
    ///
    /// Black fills the black squares of rows 1-3 and white fills the black squares of rows 6-8.
    pub fn initial_state() -> Self {
        let mut board = Self::empty();
        for (color, rows) in [(Color::Black, 1..=3), (Color::White, 6..=8)] {
            for y in rows {
                for x in 1..=BOARD_SIZE {
                    let position = Position::new(x, y);
                    if position.square_color().is_black() {
                        board.place(color, position);
                    }
                }
            }
        }
        debug_assert_eq!(board.pieces.len(), 2 * Self::PIECES_PER_SIDE);
        board
    }

    /// Look up the square at the given position
    ///
    /// Returns `None` if the position is off the board.
    pub fn square_at(&self, position: Position) -> Option<Square> {
        let idx = position.index()?;
        Some(Square {
            position,
            color: position.square_color(),
            piece: self.squares[idx],
        })
    }

    /// The piece on the given square, if the square exists and is occupied
    pub fn piece_at(&self, position: Position) -> Option<PieceId> {
        self.squares[position.index()?]
    }

    /// Get the piece with the given handle
    ///
    /// # Panics
    /// If the handle did not come from this board.
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    /// The square currently holding the given piece
    ///
    /// Returns `None` if the piece has been captured.
    pub fn square_of(&self, id: PieceId) -> Option<Square> {
        let piece = self.pieces.get(id.index())?;
        if piece.captured {
            return None;
        }
        self.square_at(piece.position)
    }

    /// All pieces of the given color which haven't been captured
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = PieceId> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .filter(move |(_, piece)| piece.color == color && !piece.captured)
            .map(|(idx, _)| PieceId(idx as u8))
    }

    /// The number of pieces of the given color which haven't been captured
    pub fn active_count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    /// Put a new piece of the given color on the board
    ///
    /// Returns the handle of the new piece, or `None` (leaving the board unchanged) if the
    /// position is off the board or already occupied.
    pub fn place(&mut self, color: Color, position: Position) -> Option<PieceId> {
        let idx = position.index()?;
        if self.squares[idx].is_some() {
            return None;
        }
        let id = PieceId(u8::try_from(self.pieces.len()).ok()?);
        self.pieces.push(Piece::new(color, position));
        self.squares[idx] = Some(id);
        Some(id)
    }

    /// Move a piece to the given square
    ///
    /// This is purely mechanical: the old square is cleared, the destination now holds the piece,
    /// and the piece's position is updated. No rules are checked here. A captured piece is left
    /// where it is.
    pub fn move_piece(&mut self, id: PieceId, destination: Square) {
        let Some(piece) = self.pieces.get_mut(id.index()) else {
            debug_assert!(false, "moving a piece that isn't on this board");
            return;
        };
        if piece.captured {
            debug_assert!(false, "moving a captured piece");
            return;
        }
        if let Some(old) = piece.position.index() {
            self.squares[old] = None;
        }
        piece.position = destination.position;
        if let Some(new) = destination.position.index() {
            self.squares[new] = Some(id);
        }
    }

    /// Take a piece off the board and mark it captured
    pub fn remove(&mut self, id: PieceId) {
        let Some(piece) = self.pieces.get_mut(id.index()) else {
            return;
        };
        if piece.captured {
            return;
        }
        piece.captured = true;
        if let Some(idx) = piece.position.index() {
            if self.squares[idx] == Some(id) {
                self.squares[idx] = None;
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial_state()
    }
}

/// Draws the board with row 1 at the top
///
/// Occupied squares show the occupant's marker, empty black squares show `#`, and empty white
/// squares are blank.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("  ")?;
        for x in 1..=BOARD_SIZE {
            write!(f, " {x} ")?;
        }
        writeln!(f)?;
        for y in 1..=BOARD_SIZE {
            write!(f, "{y} ")?;
            for x in 1..=BOARD_SIZE {
                let position = Position::new(x, y);
                let glyph = match self.piece_at(position) {
                    Some(id) => self.piece(id).marker(),
                    None if position.square_color().is_black() => '#',
                    None => ' ',
                };
                write!(f, "[{glyph}]")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_setup() {
        let board = Board::initial_state();
        assert_eq!(board.active_count(Color::Black), Board::PIECES_PER_SIDE);
        assert_eq!(board.active_count(Color::White), Board::PIECES_PER_SIDE);
        for position in Position::all_positions() {
            let square = board.square_at(position).unwrap();
            match square.piece() {
                Some(id) => {
                    let piece = board.piece(id);
                    assert!(square.color().is_black(), "{position} holds a piece");
                    assert_eq!(piece.position(), position);
                    match piece.color {
                        Color::Black => assert!((1..=3).contains(&position.y)),
                        Color::White => assert!((6..=8).contains(&position.y)),
                    }
                }
                None => {
                    if (1..=3).contains(&position.y) || (6..=8).contains(&position.y) {
                        assert!(square.color().is_white(), "{position} should be occupied");
                    }
                }
            }
        }
    }

    #[test]
    fn test_square_at_out_of_range() {
        let board = Board::initial_state();
        assert!(board.square_at(Position::new(0, 1)).is_none());
        assert!(board.square_at(Position::new(1, 9)).is_none());
        assert!(board.piece_at(Position::new(-3, 2)).is_none());
    }

    #[test]
    fn test_place_refuses_occupied() {
        let mut board = Board::empty();
        let first = board.place(Color::Black, Position::new(3, 3));
        assert!(first.is_some());
        assert_eq!(board.place(Color::White, Position::new(3, 3)), None);
        assert_eq!(board.place(Color::White, Position::new(9, 3)), None);
        assert_eq!(board.piece_at(Position::new(3, 3)), first);
    }

    #[test]
    fn test_move_keeps_square_and_piece_in_sync() {
        let mut board = Board::empty();
        let id = board.place(Color::Black, Position::new(3, 3)).unwrap();
        let target = board.square_at(Position::new(4, 4)).unwrap();
        board.move_piece(id, target);
        assert_eq!(board.piece_at(Position::new(3, 3)), None);
        assert_eq!(board.piece_at(Position::new(4, 4)), Some(id));
        assert_eq!(board.piece(id).position(), Position::new(4, 4));
        assert_eq!(board.square_of(id).unwrap().position(), Position::new(4, 4));
    }

    #[test]
    fn test_remove_marks_captured() {
        let mut board = Board::empty();
        let black = board.place(Color::Black, Position::new(3, 3)).unwrap();
        let white = board.place(Color::White, Position::new(4, 4)).unwrap();
        board.remove(white);
        assert!(board.piece(white).is_captured());
        assert_eq!(board.piece_at(Position::new(4, 4)), None);
        assert_eq!(board.square_of(white), None);
        assert_eq!(board.pieces_of(Color::White).count(), 0);
        assert_eq!(board.pieces_of(Color::Black).collect::<Vec<_>>(), vec![black]);
    }

    #[test]
    fn test_display() {
        let mut board = Board::empty();
        board.place(Color::Black, Position::new(1, 1));
        board.place(Color::White, Position::new(2, 2));
        let drawn = board.to_string();
        let mut lines = drawn.lines();
        assert_eq!(lines.next(), Some("   1  2  3  4  5  6  7  8 "));
        assert_eq!(
            lines.next(),
            Some("1 [B][ ][#][ ][#][ ][#][ ]")
        );
        assert_eq!(
            lines.next(),
            Some("2 [ ][W][ ][#][ ][#][ ][#]")
        );
        assert_eq!(lines.count(), 6);
    }
}
