//! Interactive strategy: ask a human for the move.

use std::io::{BufRead, Stdout, StdinLock, Write};

use crate::core::Result;
use crate::rules::{Game, MoveOf};

use super::Strategy;

/// Prompt shown before reading a move.
pub const PROMPT: &str = "Enter a move: ";

/// Player that reads moves from a text stream.
///
/// Input is only parsed, not validated; check it with
/// [`GameState::is_valid_move`](crate::core::GameState::is_valid_move) or
/// apply it with [`Game::play`], which rejects invalid moves.
pub struct InteractiveStrategy<R, W> {
    input: R,
    output: W,
}

impl InteractiveStrategy<StdinLock<'static>, Stdout> {
    /// Read from stdin, prompt on stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> InteractiveStrategy<R, W> {
    /// Read moves from `input`, writing prompts to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<G: Game, R: BufRead, W: Write> Strategy<G> for InteractiveStrategy<R, W> {
    /// Blocks until a line is read. End of input means no move.
    fn choose_move(&mut self, game: &G) -> Result<Option<MoveOf<G>>> {
        if game.is_over(game.current_state()) {
            return Ok(None);
        }

        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        game.parse_move(line.trim()).map(Some)
    }
}
