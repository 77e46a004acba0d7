//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines;

/// A cell on the 3x3 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A (row, column) coordinate on the board, each component in 0-2.
///
/// A move is only meaningful against a specific [`BoardState`]; whether it
/// targets an empty cell is checked by [`BoardState::with_move`], not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 board of cell marks, addressed as (row, col) in row-major order.
///
/// This type implements `Copy` for efficiency since it's only 9 bytes. It
/// carries no turn information: the caller owns move sequencing and passes
/// the mark to place explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    cells: [Cell; 9],
}

impl BoardState {
    /// Create a new empty board
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
        }
    }

    fn index(row: usize, col: usize) -> Result<usize, crate::Error> {
        if row > 2 || col > 2 {
            return Err(crate::Error::OutOfRange { row, col });
        }
        Ok(row * 3 + col)
    }

    /// Get the cell at (row, col)
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if either
    /// coordinate exceeds 2. Coordinates are never clamped.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, crate::Error> {
        Ok(self.cells[Self::index(row, col)?])
    }

    /// Check whether the cell at (row, col) holds a mark
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if either
    /// coordinate exceeds 2.
    pub fn is_occupied(&self, row: usize, col: usize) -> Result<bool, crate::Error> {
        Ok(self.get(row, col)? != Cell::Empty)
    }

    /// Get all empty cells in row-major order (row 0 left to right, then
    /// row 1, then row 2).
    ///
    /// The enumeration order is part of the contract: the search engine
    /// breaks ties between equally scored moves by taking the first one
    /// produced here.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Move::new(i / 3, i % 3))
            .collect()
    }

    /// Check if every cell holds a mark
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Check if a player has three in a row on any winning line
    pub fn has_won(&self, player: Player) -> bool {
        lines::LineScanner::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    ///
    /// X is checked before O, so an impossible board where both players
    /// hold a completed line reports X rather than panicking.
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Place `player`'s mark at `mv` and return the resulting board state
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if a
    /// coordinate exceeds 2, or [`Error::InvalidMove`](crate::Error::InvalidMove)
    /// if the cell is already occupied. An invalid move is never redirected
    /// to a different cell.
    #[must_use = "with_move returns a new board state; the original is unchanged"]
    pub fn with_move(&self, mv: Move, player: Player) -> Result<BoardState, crate::Error> {
        let idx = Self::index(mv.row, mv.col)?;
        if self.cells[idx] != Cell::Empty {
            return Err(crate::Error::InvalidMove {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut new_state = *self;
        new_state.cells[idx] = player.to_cell();
        Ok(new_state)
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters in row-major order
    /// (whitespace is filtered out), with `.` for empty cells. Piece counts
    /// are not validated: arbitrary positions, including ones unreachable in
    /// normal play, parse successfully.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string has fewer than 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(BoardState { cells })
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if i % 3 == 2 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
