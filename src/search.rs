//! A fixed-depth minimax search choosing the AI's move

use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

use crate::{
    board::{Board, Piece},
    config::SearchConfig,
    scorer::score_position,
    terminal::{terminal_state, TerminalState},
};

/// The value of a searched node and the column leading to it
///
/// Leaf nodes (depth exhausted or game over) carry no column.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i64,
}

impl SearchResult {
    fn leaf(score: i64) -> Self {
        Self {
            column: None,
            score,
        }
    }
}

/// A minimax agent with alpha-beta pruning, maximizing for the AI
///
/// # Tie-breaking
/// Before scanning the moves of a node, the best column is seeded with a
/// uniformly random playable column drawn from the injected `rng`. Moves only
/// replace it when they score strictly better, in ascending column order.
///
/// # Position Scoring
/// Leaves at depth 0 are scored by [`score_position`] for the AI. Positions
/// reached earlier that are won score `ai_win_score` / `player_win_score`,
/// draws score 0.
#[derive(Clone)]
pub struct Searcher<R> {
    config: SearchConfig,
    rng: R,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl<R: Rng> Searcher<R> {
    pub fn new(config: SearchConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            node_count: 0,
        }
    }

    /// Performs the game tree search from `board`
    ///
    /// `maximizing` is true when the AI is to move.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> SearchResult {
        self.node_count += 1;

        if depth == 0 {
            return SearchResult::leaf(score_position(board, Piece::Ai, &self.config.weights));
        }
        match terminal_state(board) {
            TerminalState::AiWin => return SearchResult::leaf(self.config.ai_win_score),
            TerminalState::PlayerWin => return SearchResult::leaf(self.config.player_win_score),
            TerminalState::Draw => return SearchResult::leaf(0),
            TerminalState::NonTerminal => {}
        }

        // a non-terminal board always has a playable column
        let columns = board.valid_columns();
        let mut best_column = columns[self.rng.random_range(0..columns.len())];

        let (piece, mut value) = if maximizing {
            (Piece::Ai, i64::MIN)
        } else {
            (Piece::Player, i64::MAX)
        };

        for &column in columns.iter() {
            let row = match board.next_open_row(column) {
                Some(row) => row,
                None => continue,
            };
            let next = board.drop_piece(row, column, piece);
            let score = self.minimax(&next, depth - 1, alpha, beta, !maximizing).score;

            if maximizing {
                if score > value {
                    value = score;
                    best_column = column;
                }
                alpha = alpha.max(value);
            } else {
                if score < value {
                    value = score;
                    best_column = column;
                }
                beta = beta.min(value);
            }
            // the other side will never allow this line, prune the remaining moves
            if alpha >= beta {
                break;
            }
        }

        SearchResult {
            column: Some(best_column),
            score: value,
        }
    }

    /// Searches `board` to the configured depth with the AI to move
    pub fn search(&mut self, board: &Board) -> SearchResult {
        let depth = self.config.depth;
        if self.config.parallel && depth > 0 && !terminal_state(board).is_finished() {
            self.parallel_root(board, depth)
        } else {
            self.minimax(board, depth, i64::MIN, i64::MAX, true)
        }
    }

    /// Returns the column the AI should play
    ///
    /// Only `None` when the board is already finished or the depth is zero.
    pub fn search_for_move(&mut self, board: &Board) -> Option<usize> {
        let start_count = self.node_count;
        let result = self.search(board);
        debug!(
            column = ?result.column,
            score = result.score,
            nodes = self.node_count - start_count,
            "search complete"
        );
        result.column
    }

    /// Searches every root move independently on the rayon thread pool
    ///
    /// Each child gets a full window, so its value is exact and the chosen
    /// column matches the sequential search.
    fn parallel_root(&mut self, board: &Board, depth: usize) -> SearchResult {
        self.node_count += 1;

        let columns = board.valid_columns();
        let mut best_column = columns[self.rng.random_range(0..columns.len())];
        let seeds: Vec<(usize, u64)> = columns
            .iter()
            .map(|&column| (column, self.rng.random()))
            .collect();

        let config = &self.config;
        let children: Vec<(usize, i64, usize)> = seeds
            .par_iter()
            .filter_map(|&(column, seed)| {
                let row = board.next_open_row(column)?;
                let next = board.drop_piece(row, column, Piece::Ai);
                let mut searcher = Searcher::new(config.clone(), StdRng::seed_from_u64(seed));
                let score = searcher
                    .minimax(&next, depth - 1, i64::MIN, i64::MAX, false)
                    .score;
                Some((column, score, searcher.node_count))
            })
            .collect();

        // par_iter().collect() keeps the ascending column order
        let mut value = i64::MIN;
        for (column, score, node_count) in children {
            self.node_count += node_count;
            if score > value {
                value = score;
                best_column = column;
            }
        }

        SearchResult {
            column: Some(best_column),
            score: value,
        }
    }
}
