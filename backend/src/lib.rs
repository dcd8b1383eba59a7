use board::{Board, Color, Move, PieceId, Player, Position, Validator};
use players::MoveInput;

mod error;

pub use crate::error::{MoveError, Result, SetupError};

/// What happened when a move was accepted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Applied {
    pub piece: PieceId,
    pub from: Position,
    pub to: Position,
    /// The piece that was jumped, if this was a capture
    pub captured: Option<PieceId>,
    /// The winner, if this move ended the game
    pub winner: Option<Color>,
}

/// A game of checkers between two players
///
/// Each turn the current player submits a piece and a destination. The move is checked, applied
/// to the board, and the turn passes to the other player. White moves first. The game ends as soon
/// as one side has no pieces left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    /// The current state of the board
    board: Board,
    players: [Player; 2],
    /// Index into `players` of whoever moves next
    current: usize,
    winner: Option<Color>,
}

impl Game {
    /// Start a game from the standard position
    pub fn new(players: [Player; 2]) -> Result<Self, SetupError> {
        Self::with_board(Board::initial_state(), players, Color::White)
    }

    /// Start a game from an arbitrary position, with `to_move` moving first
    pub fn with_board(
        board: Board,
        players: [Player; 2],
        to_move: Color,
    ) -> Result<Self, SetupError> {
        if players[0].color == players[1].color {
            return Err(SetupError::SameColor(players[0].color));
        }
        let current = if players[0].color == to_move { 0 } else { 1 };
        let winner = winner_of(&board);
        Ok(Self {
            board,
            players,
            current,
            winner,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player whose turn it is
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// The winning color, once the game is over
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Every capture the current player could make right now
    ///
    /// If this is non-empty, the current player must make one of these moves.
    pub fn forced_captures(&self) -> Vec<Move> {
        let color = self.current_player().color;
        let validator = Validator::new(&self.board);
        let captures: Vec<Move> = self
            .board
            .pieces_of(color)
            .flat_map(|id| {
                let from = self.board.piece(id).position();
                [-2, 2].map(|dx| {
                    Move::resolve(&self.board, id, from.offset(dx, 2 * color.forward()))
                })
            })
            .filter(|mv| validator.is_valid_capture(mv))
            .collect();
        tracing::debug!(%color, count = captures.len(), "enumerated forced captures");
        captures
    }

    /// Try to move the piece at `from` to `to` for the current player
    ///
    /// On success the move is applied, the turn passes to the other player, and the result says
    /// whether the game just ended. On failure nothing changes.
    pub fn submit(&mut self, from: Position, to: Position) -> Result<Applied> {
        let result = self.check(from, to);
        match &result {
            Ok(mv) => tracing::info!(
                player = %self.current_player().name,
                %from,
                %to,
                capture = mv.is_capture(),
                "move accepted"
            ),
            Err(e) => tracing::warn!(
                player = %self.current_player().name,
                %from,
                %to,
                error = %e,
                "move rejected"
            ),
        }
        result.map(|mv| self.apply(mv))
    }

    /// Work out the move a submission describes, without changing anything
    fn check(&self, from: Position, to: Position) -> Result<Move> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        let origin = self
            .board
            .square_at(from)
            .ok_or(MoveError::OutOfRangeCoordinate(from))?;
        let id = origin.piece().ok_or(MoveError::EmptySquareSelected(from))?;
        let validator = Validator::new(&self.board);
        let piece = self.board.piece(id);
        if !validator.piece_belongs_to_player(piece, self.current_player()) {
            return Err(MoveError::WrongOwner {
                position: from,
                owner: piece.color,
            });
        }
        let destination = self
            .board
            .square_at(to)
            .ok_or(MoveError::OutOfRangeCoordinate(to))?;

        let mv = Move::resolve(&self.board, id, to);
        if mv.is_jump() {
            if !validator.is_valid_capture(&mv) {
                return Err(MoveError::IllegalCapture);
            }
        } else {
            if !self.forced_captures().is_empty() {
                return Err(MoveError::MandatoryCaptureViolation);
            }
            if !validator.is_valid_move(&mv) {
                return Err(MoveError::IllegalGeometry);
            }
            if destination.is_occupied() {
                return Err(MoveError::DestinationOccupied(to));
            }
        }
        Ok(mv)
    }

    /// Apply a checked move and pass the turn
    fn apply(&mut self, mv: Move) -> Applied {
        if let Some(victim) = mv.captured {
            self.board.remove(victim);
        }
        if let Some(destination) = self.board.square_at(mv.to) {
            self.board.move_piece(mv.piece, destination);
        }
        self.current ^= 1;
        self.winner = winner_of(&self.board);
        if let Some(winner) = self.winner {
            let name = self
                .players
                .iter()
                .find(|player| player.color == winner)
                .map_or("", |player| player.name.as_str());
            tracing::info!(%winner, player = %name, "game over");
        }
        Applied {
            piece: mv.piece,
            from: mv.from,
            to: mv.to,
            captured: mv.captured,
            winner: self.winner,
        }
    }

    /// Play turns until the game ends or `input` runs out
    ///
    /// Unreadable input and illegal moves are reported back to `input` and the same player is
    /// asked again. Returns the winner, or `None` if the input ran out first.
    pub fn play(&mut self, input: &mut impl MoveInput) -> Option<Color> {
        while self.winner.is_none() {
            let player = self.current_player().clone();
            let request = match input.request_move(&player, &self.board)? {
                Ok(request) => request,
                Err(e) => {
                    tracing::warn!(player = %player.name, error = %e, "unreadable move");
                    input.reject(&player, &e);
                    continue;
                }
            };
            if let Err(e) = self.submit(request.from, request.to) {
                input.reject(&player, &e);
            }
        }
        self.winner
    }
}

/// The side that has won, if either side has no pieces left
fn winner_of(board: &Board) -> Option<Color> {
    Color::COLORS
        .into_iter()
        .find(|&color| board.active_count(color) == 0)
        .map(Color::other)
}

#[cfg(test)]
mod tests {
    use super::*;

    use players::ScriptedInput;
    use quickcheck::{quickcheck, Arbitrary, Gen};

    fn players() -> [Player; 2] {
        [
            Player::new("Wendy", Color::White),
            Player::new("Bob", Color::Black),
        ]
    }

    fn game_from(pieces: &[(Color, i8, i8)], to_move: Color) -> Game {
        let mut board = Board::empty();
        for &(color, x, y) in pieces {
            board.place(color, Position::new(x, y)).unwrap();
        }
        Game::with_board(board, players(), to_move).unwrap()
    }

    fn pos(x: i8, y: i8) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn test_setup_requires_opposite_colors() {
        let same = [
            Player::new("a", Color::Black),
            Player::new("b", Color::Black),
        ];
        assert_eq!(Game::new(same), Err(SetupError::SameColor(Color::Black)));
    }

    #[test]
    fn test_white_moves_first() {
        let game = Game::new([
            Player::new("Bob", Color::Black),
            Player::new("Wendy", Color::White),
        ])
        .unwrap();
        assert_eq!(game.current_player().color, Color::White);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(players()).unwrap();
        game.submit(pos(2, 6), pos(3, 5)).unwrap();
        assert_eq!(game.current_player().color, Color::Black);
        game.submit(pos(3, 3), pos(4, 4)).unwrap();
        assert_eq!(game.current_player().color, Color::White);
    }

    #[test]
    fn test_selection_errors() {
        let mut game = Game::new(players()).unwrap();
        assert_eq!(
            game.submit(pos(0, 6), pos(1, 5)),
            Err(MoveError::OutOfRangeCoordinate(pos(0, 6)))
        );
        assert_eq!(
            game.submit(pos(4, 4), pos(5, 5)),
            Err(MoveError::EmptySquareSelected(pos(4, 4)))
        );
        assert_eq!(
            game.submit(pos(1, 3), pos(2, 4)),
            Err(MoveError::WrongOwner {
                position: pos(1, 3),
                owner: Color::Black,
            })
        );
        assert_eq!(
            game.submit(pos(8, 6), pos(9, 5)),
            Err(MoveError::OutOfRangeCoordinate(pos(9, 5)))
        );
    }

    #[test]
    fn test_geometry_errors() {
        let mut game = Game::new(players()).unwrap();
        assert_eq!(
            game.submit(pos(2, 6), pos(2, 5)),
            Err(MoveError::IllegalGeometry)
        );
        assert_eq!(
            game.submit(pos(2, 6), pos(4, 4)),
            Err(MoveError::IllegalCapture)
        );
        assert_eq!(
            game.submit(pos(1, 7), pos(2, 8)),
            Err(MoveError::IllegalGeometry)
        );
        assert_eq!(
            game.submit(pos(3, 7), pos(2, 6)),
            Err(MoveError::DestinationOccupied(pos(2, 6)))
        );
    }

    #[test]
    fn test_capture_midpoint() {
        // Black jumps from (3, 3) to (5, 5), so the captured piece must be at (4, 4)
        let mut game = game_from(
            &[(Color::Black, 3, 3), (Color::White, 6, 6), (Color::White, 8, 8)],
            Color::Black,
        );
        assert_eq!(
            game.submit(pos(3, 3), pos(5, 5)),
            Err(MoveError::IllegalCapture)
        );

        let mut game = game_from(
            &[(Color::Black, 3, 3), (Color::White, 4, 4), (Color::White, 8, 8)],
            Color::Black,
        );
        let applied = game.submit(pos(3, 3), pos(5, 5)).unwrap();
        let captured_at = applied.captured.map(|id| game.board().piece(id).position());
        assert_eq!(captured_at, Some(pos(4, 4)));
        assert_eq!(game.board().piece_at(pos(4, 4)), None);
        assert_eq!(game.board().active_count(Color::White), 1);
    }

    #[test]
    fn test_backward_capture_rejected() {
        let mut game = game_from(
            &[(Color::Black, 3, 5), (Color::White, 4, 4), (Color::White, 8, 8)],
            Color::Black,
        );
        assert_eq!(
            game.submit(pos(3, 5), pos(5, 3)),
            Err(MoveError::IllegalCapture)
        );
    }

    #[test]
    fn test_capture_example() {
        let mut game = game_from(
            &[(Color::Black, 1, 3), (Color::White, 2, 4), (Color::White, 8, 8)],
            Color::Black,
        );
        let black = game.board().piece_at(pos(1, 3)).unwrap();
        let white = game.board().piece_at(pos(2, 4)).unwrap();
        let applied = game.submit(pos(1, 3), pos(3, 5)).unwrap();
        assert_eq!(applied.captured, Some(white));
        assert_eq!(applied.winner, None);
        assert!(game.board().piece(white).is_captured());
        assert_eq!(game.board().piece_at(pos(2, 4)), None);
        assert_eq!(game.board().piece_at(pos(3, 5)), Some(black));
        assert_eq!(game.board().piece(black).position(), pos(3, 5));
        assert_eq!(game.current_player().color, Color::White);
    }

    #[test]
    fn test_mandatory_capture() {
        let mut game = Game::new(players()).unwrap();
        game.submit(pos(2, 6), pos(3, 5)).unwrap();
        game.submit(pos(3, 3), pos(4, 4)).unwrap();
        game.submit(pos(4, 6), pos(5, 5)).unwrap();

        let captures = game.forced_captures();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].from, pos(4, 4));
        assert_eq!(captures[0].to, pos(2, 6));

        assert_eq!(
            game.submit(pos(1, 3), pos(2, 4)),
            Err(MoveError::MandatoryCaptureViolation)
        );
        let applied = game.submit(pos(4, 4), pos(2, 6)).unwrap();
        assert!(applied.captured.is_some());
        assert_eq!(game.board().active_count(Color::White), 11);
    }

    #[test]
    fn test_game_ends_when_side_eliminated() {
        let mut game = game_from(
            &[(Color::Black, 1, 3), (Color::White, 2, 4)],
            Color::Black,
        );
        let applied = game.submit(pos(1, 3), pos(3, 5)).unwrap();
        assert_eq!(applied.winner, Some(Color::Black));
        assert_eq!(game.winner(), Some(Color::Black));
        assert_eq!(game.submit(pos(3, 5), pos(4, 6)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_empty_side_already_lost() {
        let game = game_from(&[(Color::White, 2, 6)], Color::White);
        assert_eq!(game.winner(), Some(Color::White));
    }

    #[test]
    fn test_play_retries_until_won() {
        let mut game = game_from(
            &[(Color::Black, 1, 3), (Color::White, 2, 4)],
            Color::Black,
        );
        let mut input = ScriptedInput::new([
            "what",
            "2 4 1 3",
            "1 3 2 4",
            "1 3 3 5",
            "never read",
        ]);
        assert_eq!(game.play(&mut input), Some(Color::Black));
        assert_eq!(input.remaining(), 1);
    }

    #[test]
    fn test_play_stops_when_input_runs_out() {
        let mut game = Game::new(players()).unwrap();
        let mut input = ScriptedInput::new(["2 6 3 5", "3 3 4 4"]);
        assert_eq!(game.play(&mut input), None);
        assert_eq!(game.current_player().color, Color::White);
        let moved = game.board().piece_at(pos(4, 4)).map(|id| game.board().piece(id).color);
        assert_eq!(moved, Some(Color::Black));
    }

    /// A submission with coordinates anywhere near the board
    #[derive(Clone, Debug)]
    struct Attempt(Position, Position);
    impl Arbitrary for Attempt {
        fn arbitrary(g: &mut Gen) -> Self {
            let coord = |g: &mut Gen| *g.choose(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
            Self(
                Position::new(coord(g), coord(g)),
                Position::new(coord(g), coord(g)),
            )
        }
    }

    quickcheck! {
        fn test_rejection_changes_nothing(attempts: Vec<Attempt>) -> bool {
            let mut game = Game::new(players()).unwrap();
            for Attempt(from, to) in attempts {
                let before = game.clone();
                if game.submit(from, to).is_err() && game != before {
                    return false;
                }
            }
            true
        }

        fn test_board_stays_consistent(attempts: Vec<Attempt>) -> bool {
            let mut game = Game::new(players()).unwrap();
            for Attempt(from, to) in attempts {
                let _ = game.submit(from, to);
            }
            let board = game.board();
            Color::COLORS.into_iter().all(|color| {
                board.pieces_of(color).all(|id| {
                    board.square_of(id).and_then(|square| square.piece()) == Some(id)
                })
            })
        }
    }
}
