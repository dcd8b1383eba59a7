//! An input for a human typing in the terminal

use std::io::{self, BufRead, Write};

use board::{Board, Player};
use players::{InputError, MoveInput, MoveRequest};

/// Reads moves from a terminal, drawing the board before each prompt
///
/// Generic over the reader and writer so it can be driven by anything line-based.
pub struct TerminalInput<R, W> {
    reader: R,
    writer: W,
}

impl TerminalInput<io::StdinLock<'static>, io::Stdout> {
    /// An input reading from stdin and drawing to stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalInput<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn prompt(&mut self, player: &Player, board: &Board) -> io::Result<()> {
        writeln!(self.writer, "{board}")?;
        write!(
            self.writer,
            "{} ({}), enter your move as `x1 y1 x2 y2`: ",
            player.name, player.color
        )?;
        self.writer.flush()
    }
}

impl<R: BufRead, W: Write> MoveInput for TerminalInput<R, W> {
    fn request_move(
        &mut self,
        player: &Player,
        board: &Board,
    ) -> Option<Result<MoveRequest, InputError>> {
        if let Err(e) = self.prompt(player, board) {
            tracing::warn!(error = %e, "couldn't draw prompt");
        }
        let mut buffer = String::new();
        match self.reader.read_line(&mut buffer) {
            Ok(0) => None,
            Ok(_) => Some(buffer.parse()),
            Err(e) => {
                tracing::warn!(error = %e, "error reading input, stopping");
                None
            }
        }
    }

    fn reject(&mut self, player: &Player, reason: &dyn std::error::Error) {
        let _ = writeln!(self.writer, "Sorry {}, {reason}. Try again.", player.name);
    }
}
