//! Traits for wherever a player's moves come from

use core::str::FromStr;
use std::collections::VecDeque;

use board::{Board, Player, Position};

/// A move as entered by a player, before anything about it has been checked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    /// The square of the piece to move
    pub from: Position,
    /// The square to move it to
    pub to: Position,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("expected four numbers `x1 y1 x2 y2`, got {0:?}")]
    Malformed(String),
}

/// Parses `x1 y1 x2 y2`, allowing commas as well as whitespace between numbers
///
/// Numbers outside the board parse fine; they are rejected when the move is submitted.
///
/// ```
/// use board::Position;
/// use players::MoveRequest;
///
/// let request: MoveRequest = "1,3 2,4".parse().unwrap();
/// assert_eq!(request.from, Position::new(1, 3));
/// assert_eq!(request.to, Position::new(2, 4));
/// ```
impl FromStr for MoveRequest {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InputError::Malformed(s.trim().to_owned());
        let coords = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<i8>().map_err(|_| malformed()))
            .collect::<Result<Vec<_>, _>>()?;
        let [x1, y1, x2, y2] = coords[..] else {
            return Err(malformed());
        };
        Ok(Self {
            from: Position::new(x1, y1),
            to: Position::new(x2, y2),
        })
    }
}

/// A source of moves for a game
///
/// This trait is generic over how moves are chosen, so a person at a terminal and a fixed script
/// can both drive a game.
pub trait MoveInput {
    /// Ask `player` for their next move on `board`
    ///
    /// Returns `None` once no more input is available, which ends the game without a winner.
    /// Unreadable input is returned as an error so the caller can ask again.
    fn request_move(
        &mut self,
        player: &Player,
        board: &Board,
    ) -> Option<Result<MoveRequest, InputError>>;

    /// Tell the input source why its last move was refused
    fn reject(&mut self, _player: &Player, _reason: &dyn std::error::Error) {}
}

/// Replays a fixed list of input lines, one per move attempt
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// The number of lines not yet consumed
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl MoveInput for ScriptedInput {
    fn request_move(
        &mut self,
        _player: &Player,
        _board: &Board,
    ) -> Option<Result<MoveRequest, InputError>> {
        self.lines.pop_front().map(|line| line.parse())
    }
}
