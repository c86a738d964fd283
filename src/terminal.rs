//! Detection of won and drawn positions

use std::convert::TryFrom;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Piece};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TerminalState {
    NonTerminal,
    PlayerWin,
    AiWin,
    Draw,
}

impl TerminalState {
    pub fn is_finished(self) -> bool {
        self != TerminalState::NonTerminal
    }

    /// The winner reported for this state, ongoing games and draws have none
    pub fn winner(self) -> Winner {
        match self {
            TerminalState::PlayerWin => Winner::Player,
            TerminalState::AiWin => Winner::Ai,
            TerminalState::Draw | TerminalState::NonTerminal => Winner::None,
        }
    }
}

/// The winner code shared with the outside world: 0 for no winner, 1 for the
/// player and 2 for the AI
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Winner {
    None,
    Player,
    Ai,
}

impl Winner {
    pub const ALL: [Winner; 3] = [Winner::None, Winner::Player, Winner::Ai];

    pub fn code(self) -> u8 {
        match self {
            Winner::None => 0,
            Winner::Player => 1,
            Winner::Ai => 2,
        }
    }
}

impl From<Winner> for u8 {
    fn from(winner: Winner) -> Self {
        winner.code()
    }
}

impl TryFrom<u8> for Winner {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Winner::ALL
            .iter()
            .copied()
            .find(|winner| winner.code() == code)
            .ok_or_else(|| format!("unknown winner code {}", code))
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::None => write!(f, "no winner"),
            Winner::Player => write!(f, "player"),
            Winner::Ai => write!(f, "AI"),
        }
    }
}

/// Checks whether `piece` has four aligned tiles anywhere on the board
pub fn winning_move(board: &Board, piece: Piece) -> bool {
    if piece.is_empty() {
        return false;
    }
    board
        .windows()
        .any(|window| window.iter().all(|&tile| tile == piece))
}

/// Classifies a board
///
/// A player alignment is checked before an AI alignment, so a board where
/// both sides have four in a row reports `PlayerWin`.
pub fn terminal_state(board: &Board) -> TerminalState {
    if winning_move(board, Piece::Player) {
        TerminalState::PlayerWin
    } else if winning_move(board, Piece::Ai) {
        TerminalState::AiWin
    } else if board.is_full() {
        TerminalState::Draw
    } else {
        TerminalState::NonTerminal
    }
}
