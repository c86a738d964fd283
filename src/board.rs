use std::fmt;
use std::str::FromStr;

use crate::{error::MalformedBoardError, ENCODED_LENGTH, HEIGHT, WIDTH, WINDOW_LENGTH};

/// The contents of a single tile
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Piece {
    Empty,
    Player,
    Ai,
}

impl Piece {
    /// The character used for this piece in the board encoding
    pub fn code(self) -> char {
        match self {
            Piece::Empty => '0',
            Piece::Player => '1',
            Piece::Ai => '2',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '0' => Some(Piece::Empty),
            '1' => Some(Piece::Player),
            '2' => Some(Piece::Ai),
            _ => None,
        }
    }

    /// The other side's piece, `Empty` has no opponent
    pub fn opponent(self) -> Self {
        match self {
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
            Piece::Empty => Piece::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }
}

/// Step directions (row, column) of the four kinds of line window:
/// horizontal, vertical, positive slope and negative slope
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// A 6x7 Connect 4 grid
///
/// Row 0 is the bottom of the board, where pieces come to rest. The board is
/// `Copy`, so every branch of a search works on its own snapshot.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Piece; WIDTH]; HEIGHT], // cells[row][column], bottom-to-top
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Piece::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Parses the 42 character external encoding
    ///
    /// The encoding lists rows from the top of the board down, each row
    /// left-to-right, using `0` for empty tiles, `1` for the player and `2` for the AI.
    pub fn decode(encoding: &str) -> Result<Self, MalformedBoardError> {
        let found = encoding.chars().count();
        if found != ENCODED_LENGTH {
            return Err(MalformedBoardError::WrongLength { found });
        }

        let mut board = Self::new();
        for (index, code) in encoding.chars().enumerate() {
            let piece = Piece::from_code(code)
                .ok_or(MalformedBoardError::InvalidCell { index, found: code })?;
            // the first encoded row is the top of the board
            board.cells[HEIGHT - 1 - index / WIDTH][index % WIDTH] = piece;
        }
        Ok(board)
    }

    /// Produces the canonical external encoding, the inverse of [`Board::decode`]
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .rev()
            .flat_map(|row| row.iter().map(|piece| piece.code()))
            .collect()
    }

    pub fn get(&self, row: usize, column: usize) -> Piece {
        self.cells[row][column]
    }

    /// A column can be played while its top tile is empty
    pub fn is_valid_column(&self, column: usize) -> bool {
        column < WIDTH && self.cells[HEIGHT - 1][column].is_empty()
    }

    /// All playable columns in ascending order
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&column| self.is_valid_column(column)).collect()
    }

    /// The lowest empty row of a column, `None` if the column is full
    pub fn next_open_row(&self, column: usize) -> Option<usize> {
        (0..HEIGHT).find(|&row| self.cells[row][column].is_empty())
    }

    /// Returns a copy of this board with `piece` placed at the given tile
    #[must_use]
    pub fn drop_piece(&self, row: usize, column: usize, piece: Piece) -> Self {
        let mut next = *self;
        next.place(row, column, piece);
        next
    }

    /// Places `piece` at the given tile in place
    pub fn place(&mut self, row: usize, column: usize, piece: Piece) {
        self.cells[row][column] = piece;
    }

    /// Drops `piece` into the lowest open row of `column`, returning the row it landed on
    pub fn play(&mut self, column: usize, piece: Piece) -> Option<usize> {
        if !self.is_valid_column(column) {
            return None;
        }
        let row = self.next_open_row(column)?;
        self.place(row, column, piece);
        Some(row)
    }

    /// The tiles of one column, bottom-to-top
    pub fn column(&self, column: usize) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().map(move |row| row[column])
    }

    /// No column can be played
    pub fn is_full(&self) -> bool {
        self.valid_columns().is_empty()
    }

    /// Every line window of `WINDOW_LENGTH` tiles on the board
    ///
    /// Windows are produced direction by direction: horizontal, vertical,
    /// positive slope diagonals and negative slope diagonals.
    pub fn windows(&self) -> impl Iterator<Item = [Piece; WINDOW_LENGTH]> + '_ {
        DIRECTIONS.iter().flat_map(move |&(d_row, d_column)| {
            (0..HEIGHT)
                .flat_map(|row| (0..WIDTH).map(move |column| (row, column)))
                .filter_map(move |(row, column)| self.window(row, column, d_row, d_column))
        })
    }

    fn window(
        &self,
        row: usize,
        column: usize,
        d_row: isize,
        d_column: isize,
    ) -> Option<[Piece; WINDOW_LENGTH]> {
        let mut window = [Piece::Empty; WINDOW_LENGTH];
        for (i, tile) in window.iter_mut().enumerate() {
            let y = row as isize + d_row * i as isize;
            let x = column as isize + d_column * i as isize;
            if y < 0 || y >= HEIGHT as isize || x < 0 || x >= WIDTH as isize {
                return None;
            }
            *tile = self.cells[y as usize][x as usize];
        }
        Some(window)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = MalformedBoardError;

    fn from_str(encoding: &str) -> Result<Self, Self::Err> {
        Self::decode(encoding)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // one visual row per line, top row first
        for row in self.cells.iter().rev() {
            let line: String = row.iter().map(|piece| piece.code()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
