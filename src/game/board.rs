use crate::config::{DEFAULT_COLUMNS, DEFAULT_ROWS};

use super::{
    components::{GameState, Occupant, Player, Players},
    error::{Error, GameResult},
};

/// Pawns needed in a line to win.
const RUN: usize = 4;

/// The grid, stored as one stack per column with index 0 at the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    stacks: Vec<Vec<Player>>,
    rows: usize,
    columns: usize,
}

impl Board {
    /// Create a new empty board.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDim` if either dimension is zero.
    pub fn new(rows: usize, columns: usize) -> GameResult<Self> {
        if rows == 0 || columns == 0 {
            return Err(Error::InvalidDim);
        }
        Ok(Self {
            stacks: vec![Vec::with_capacity(rows); columns],
            rows,
            columns,
        })
    }

    /// Build a board directly from column stacks, bottom pawn first.
    #[cfg(test)]
    pub(crate) fn from_stacks(rows: usize, stacks: Vec<Vec<Player>>) -> GameResult<Self> {
        let mut board = Self::new(rows, stacks.len())?;
        if stacks.iter().any(|stack| stack.len() > rows) {
            return Err(Error::ColumnFull);
        }
        board.stacks = stacks;
        Ok(board)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Push a pawn on top of the given column. The column is zero indexed.
    ///
    /// Returns the row the pawn landed in.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidColumn` if the column is outside the board dimensions.
    ///
    /// Returns `Error::ColumnFull` if the column already holds `rows` pawns.
    pub fn place(&mut self, col: usize, player: Player) -> GameResult<usize> {
        let rows = self.rows;
        let stack = self.stacks.get_mut(col).ok_or(Error::InvalidColumn)?;
        if stack.len() >= rows {
            return Err(Error::ColumnFull);
        }
        stack.push(player);
        log::trace!("placed {player:?} at column {col}, row {}", stack.len() - 1);
        Ok(stack.len() - 1)
    }

    /// Get the occupant at (column, row), row 0 being the bottom.
    pub fn get(&self, col: usize, row: usize) -> GameResult<Occupant> {
        if col >= self.columns || row >= self.rows {
            return Err(Error::InvalidPosition);
        }
        Ok(self.pawn(col, row).into())
    }

    /// Number of pawns in the given column, or `None` if it does not exist.
    pub fn height(&self, col: usize) -> Option<usize> {
        self.stacks.get(col).map(Vec::len)
    }

    /// A column that does not exist counts as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.height(col).map_or(true, |height| height >= self.rows)
    }

    /// Total number of pawns on the board.
    pub fn pawns(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum()
    }

    /// Every cell holds a pawn.
    pub fn is_full(&self) -> bool {
        self.pawns() == self.rows * self.columns
    }

    /// Pawn at (column, row). Off-board and empty cells are both `None`,
    /// which never equals a real pawn.
    fn pawn(&self, col: usize, row: usize) -> Option<Player> {
        self.stacks.get(col)?.get(row).copied()
    }

    /// The player owning all cells of the line, if there is one.
    fn line(&self, cells: impl Iterator<Item = (usize, usize)>) -> Option<Player> {
        let mut owner = None;
        for (col, row) in cells {
            let pawn = self.pawn(col, row)?;
            match owner {
                None => owner = Some(pawn),
                Some(p) if p != pawn => return None,
                Some(_) => (),
            }
        }
        owner
    }

    /// Check if any player has 4 connected pawns.
    ///
    /// Scans columns left to right and each column bottom to top, testing
    /// vertical, horizontal, ascending and descending lines starting at every
    /// pawn. The first line found wins. Returns a draw when the board is full
    /// without a line.
    pub fn evaluate(&self) -> GameState {
        for (c, stack) in self.stacks.iter().enumerate() {
            let horizontal = c + RUN <= self.columns;

            for r in 0..stack.len() {
                let vertical = r + RUN <= stack.len();

                if vertical {
                    if let Some(p) = self.line((0..RUN).map(|k| (c, r + k))) {
                        return GameState::Win(p);
                    }
                }

                if horizontal {
                    if let Some(p) = self.line((0..RUN).map(|k| (c + k, r))) {
                        return GameState::Win(p);
                    }

                    // up & right
                    if let Some(p) = self.line((0..RUN).map(|k| (c + k, r + k))) {
                        return GameState::Win(p);
                    }

                    // down & right
                    if r + 1 >= RUN {
                        if let Some(p) = self.line((0..RUN).map(|k| (c + k, r - k))) {
                            return GameState::Win(p);
                        }
                    }
                }
            }
        }

        if self.is_full() {
            GameState::Draw
        } else {
            GameState::Ongoing
        }
    }

    /// Draw the board using the players' markers, top row first.
    pub(crate) fn render(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        players: &Players,
    ) -> std::fmt::Result {
        write!(f, "#")?;
        for x in 1..=self.columns {
            if x < 10 {
                write!(f, "-{x}-")?;
            } else if x < 100 {
                write!(f, "{x}-")?;
            } else {
                write!(f, "{x}")?;
            }
        }
        writeln!(f, "#")?;
        for y in (0..self.rows).rev() {
            write!(f, "|")?;
            for x in 0..self.columns {
                match self.pawn(x, y) {
                    Some(p) => write!(f, " {} ", players.marker(p))?,
                    None => write!(f, " . ")?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "#")?;
        for _ in 0..self.columns {
            write!(f, "---")?;
        }
        writeln!(f, "#")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            stacks: vec![Vec::new(); DEFAULT_COLUMNS],
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.render(f, &Players::default())
    }
}
