use board::{Color, Position};

pub type Result<T, E = MoveError> = core::result::Result<T, E>;

/// Why a submitted move was refused
///
/// Every variant is recoverable: the game state is untouched and the same player moves again.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum MoveError {
    #[error("{0} is not on the board")]
    OutOfRangeCoordinate(Position),
    #[error("there is no piece at {0}")]
    EmptySquareSelected(Position),
    #[error("the piece at {position} belongs to {owner}")]
    WrongOwner { position: Position, owner: Color },
    #[error("a piece can only step one square diagonally forward")]
    IllegalGeometry,
    #[error("a capture must jump an opposing piece onto an empty square")]
    IllegalCapture,
    #[error("a capture is available, so a capture must be made")]
    MandatoryCaptureViolation,
    #[error("{0} is already occupied")]
    DestinationOccupied(Position),
    #[error("the game is already over")]
    GameOver,
}

/// Why a game couldn't be set up
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("both players are {0}, but they need opposite colors")]
    SameColor(Color),
}
