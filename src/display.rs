use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, Print, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_opponent::{board::Board, board::Piece, HEIGHT, WIDTH};

/// Draws the board to stdout, column numbers on top and the bottom row last
pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let columns: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(Print(columns + "\n"))?;

    for row in (0..HEIGHT).rev() {
        for column in 0..WIDTH {
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match board.get(row, column) {
                        Piece::Player => Color::Red,
                        Piece::Ai => Color::Yellow,
                        Piece::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(Print("\n"))?;
    }
    stdout.flush()?;
    Ok(())
}
