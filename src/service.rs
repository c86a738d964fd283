//! The move computation boundary: external encoding in, move outcome out

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    board::{Board, Piece},
    error::MoveError,
    search::Searcher,
    terminal::terminal_state,
};

pub use crate::terminal::Winner;

/// The result of a move request
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Whether the AI played a move
    pub move_valid: bool,
    /// The column the AI played, only meaningful if `move_valid`
    pub move_col: usize,
    pub is_finished: bool,
    pub winner: Winner,
}

/// Receives the winner of every finished game
pub trait WinRecorder {
    fn record(&mut self, winner: Winner) -> anyhow::Result<()>;
}

impl WinRecorder for Vec<Winner> {
    fn record(&mut self, winner: Winner) -> anyhow::Result<()> {
        self.push(winner);
        Ok(())
    }
}

impl<W: WinRecorder + ?Sized> WinRecorder for &mut W {
    fn record(&mut self, winner: Winner) -> anyhow::Result<()> {
        (**self).record(winner)
    }
}

/// Computes AI replies to board positions and reports finished games
pub struct MoveService<R, W> {
    searcher: Searcher<R>,
    recorder: W,
}

impl<R: Rng, W: WinRecorder> MoveService<R, W> {
    pub fn new(searcher: Searcher<R>, recorder: W) -> Self {
        Self { searcher, recorder }
    }

    pub fn recorder(&self) -> &W {
        &self.recorder
    }

    /// Decodes `encoding`, plays the AI's reply and reports the resulting state
    ///
    /// A board that is already finished is reported as such without searching.
    /// A malformed encoding is rejected before anything else happens.
    pub fn compute_move(&mut self, encoding: &str) -> Result<MoveOutcome, MoveError> {
        let mut board = Board::decode(encoding)?;

        let state = terminal_state(&board);
        let outcome = if state.is_finished() {
            debug!(?state, "board already finished, skipping search");
            MoveOutcome {
                move_valid: false,
                move_col: 0,
                is_finished: true,
                winner: state.winner(),
            }
        } else {
            let column = self
                .searcher
                .search_for_move(&board)
                .ok_or(MoveError::NoMoveFound)?;
            let row = board.next_open_row(column).ok_or(MoveError::NoMoveFound)?;
            board.place(row, column, Piece::Ai);

            let state = terminal_state(&board);
            info!(column, ?state, "AI played");
            MoveOutcome {
                move_valid: true,
                move_col: column,
                is_finished: state.is_finished(),
                winner: state.winner(),
            }
        };

        if outcome.is_finished {
            info!(winner = %outcome.winner, "game finished");
            self.recorder
                .record(outcome.winner)
                .map_err(MoveError::Record)?;
        }
        Ok(outcome)
    }
}
