//! Static evaluation of a position

use crate::{
    board::{Board, Piece},
    config::ScoreWeights,
    WIDTH, WINDOW_LENGTH,
};

/// Scores a single line window from the point of view of `piece`
pub fn evaluate_window(
    window: &[Piece; WINDOW_LENGTH],
    piece: Piece,
    weights: &ScoreWeights,
) -> i64 {
    let count = |target: Piece| window.iter().filter(|&&tile| tile == target).count();
    let own = count(piece);
    let empty = count(Piece::Empty);
    let opponent = count(piece.opponent());

    let mut score = 0;
    if own == 4 {
        score += weights.four;
    } else if own == 3 && empty == 1 {
        score += weights.three;
    } else if own == 2 && empty == 2 {
        score += weights.two;
    }

    // the opponent is one move away from completing this window
    if opponent == 3 && empty == 1 {
        score += weights.opponent_three;
    }
    score
}

/// Heuristic value of a board for `piece`, without any look-ahead
///
/// Rewards pieces in the center column and sums [`evaluate_window`] over every
/// horizontal, vertical and diagonal window.
pub fn score_position(board: &Board, piece: Piece, weights: &ScoreWeights) -> i64 {
    let center_count = board
        .column(WIDTH / 2)
        .filter(|&tile| tile == piece)
        .count() as i64;

    center_count * weights.center
        + board
            .windows()
            .map(|window| evaluate_window(&window, piece, weights))
            .sum::<i64>()
}
