//! Board structure: one [`Stone`] per cell

use serde::{Deserialize, Serialize};

use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Game board
///
/// Each cell holds exactly one of `Empty`, `Black` or `White`. Saved games
/// encode the board as [`BOARD_SIZE`] row strings over `.`, `X` and `O`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<String>", try_from = "Vec<String>")]
pub struct Board {
    cells: [Stone; TOTAL_CELLS],
    /// Number of non-empty cells
    stones: u32,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Stone::Empty; TOTAL_CELLS],
            stones: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone (no legality checks; the game layer validates moves)
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let cell = &mut self.cells[pos.to_index()];
        match (*cell, stone) {
            (Stone::Empty, Stone::Black | Stone::White) => self.stones += 1,
            (Stone::Black | Stone::White, Stone::Empty) => self.stones -= 1,
            _ => {}
        }
        *cell = stone;
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.place_stone(pos, Stone::Empty);
    }

    /// Temporarily put `stone` on an empty cell, run `f`, then restore the cell.
    ///
    /// The board seen by the caller afterwards is identical to the board before.
    pub fn probe<T>(&mut self, pos: Pos, stone: Stone, f: impl FnOnce(&Board) -> T) -> T {
        debug_assert!(self.is_empty(pos), "probe on occupied cell {pos}");
        self.place_stone(pos, stone);
        let result = f(self);
        self.remove_stone(pos);
        result
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&pos| self.is_empty(pos))
    }

    /// Number of occupied cells in the 3x3 block around `pos`
    pub fn occupied_neighbors(&self, pos: Pos) -> u32 {
        pos.neighbors().filter(|&n| !self.is_empty(n)).count() as u32
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.stones
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }

    /// Check if no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones as usize == TOTAL_CELLS
    }

    /// Row strings over `.`, `X` and `O`
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(BOARD_SIZE)
            .map(|row| row.iter().map(|s| s.to_char()).collect())
            .collect()
    }

    /// Parse row strings produced by [`Board::to_rows`]
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, String> {
        if rows.len() != BOARD_SIZE {
            return Err(format!("expected {BOARD_SIZE} rows, found {}", rows.len()));
        }

        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let width = row.chars().count();
            if width != BOARD_SIZE {
                return Err(format!("row {r}: expected {BOARD_SIZE} cells, found {width}"));
            }
            for (c, ch) in row.chars().enumerate() {
                let stone = Stone::from_char(ch)
                    .ok_or_else(|| format!("row {r}: unexpected cell {ch:?}"))?;
                board.place_stone(Pos::new(r as u8, c as u8), stone);
            }
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Board> for Vec<String> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}

impl TryFrom<Vec<String>> for Board {
    type Error = String;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        Board::from_rows(&rows)
    }
}
