mod cell;
mod segment;

use std::collections::BTreeSet;

pub use cell::*;
pub use segment::*;

use crate::{IllegalMove, InvalidDimensions, Player};

/// The game state: the grid topology, which segments are used, who owns
/// which cell, and whose turn it is.
///
/// Segments are numbered like this on a 2x2 board:
///
/// ```text
///       0       1
///   +-------+-------+
///   |       |       |
///  6|      7|      8|
///   |   2   |   3   |
///   +-------+-------+
///   |       |       |
///  9|     10|     11|
///   |   4   |   5   |
///   +-------+-------+
/// ```
///
/// i.e. all horizontal segments line by line, then the vertical segments row by row.
#[derive(Clone, Debug)]
pub struct Board {
    rows: usize,
    columns: usize,
    /// Indexed by [`SegmentId`].
    segments: Vec<Segment>,
    /// Row-major.
    cells: Vec<Cell>,
    current_player: Player,
}

/// Summarizes the effects of a legal move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Who made the move.
    pub player: Player,
    /// The cells completed by this move, at most two.
    pub completed_cells: Vec<CellPos>,
    /// Whose turn it is now.
    pub next_player: Player,
}

impl MoveOutcome {
    /// Did the player earn another move?
    pub fn bonus_move(&self) -> bool {
        !self.completed_cells.is_empty()
    }
}

impl Board {
    /// Creates an empty board where player one moves first.
    pub fn new(rows: usize, columns: usize) -> Result<Self, InvalidDimensions> {
        Self::with_first_player(rows, columns, Player::One)
    }

    /// Creates an empty board with `rows * columns` cells.
    pub fn with_first_player(
        rows: usize,
        columns: usize,
        first_player: Player,
    ) -> Result<Self, InvalidDimensions> {
        if rows == 0 || columns == 0 {
            return Err(InvalidDimensions { rows, columns });
        }

        let invalid = InvalidDimensions { rows, columns };
        let num_cells = rows.checked_mul(columns).ok_or(invalid)?;
        let num_segments = rows
            .checked_add(1)
            .and_then(|lines| columns.checked_mul(lines))
            .zip(columns.checked_add(1).and_then(|lines| rows.checked_mul(lines)))
            .and_then(|(horizontal, vertical)| horizontal.checked_add(vertical))
            .ok_or(invalid)?;

        // Sizes that fit into a usize can still be too big to allocate
        let mut segments = Vec::new();
        segments
            .try_reserve_exact(num_segments)
            .map_err(|_| invalid)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(num_cells).map_err(|_| invalid)?;

        // Horizontal lines, top to bottom. The first line only borders the
        // cells below it, the last only the cells above it.
        for line in 0..=rows {
            for col in 0..columns {
                let above = (line > 0).then(|| (line - 1, col));
                let below = (line < rows).then_some((line, col));
                segments.push(Segment::horizontal(above, below));
            }
        }

        // Vertical segments, row by row, left to right.
        for row in 0..rows {
            for line in 0..=columns {
                let left = (line > 0).then(|| (row, line - 1));
                let right = (line < columns).then_some((row, line));
                segments.push(Segment::vertical(left, right));
            }
        }
        debug_assert_eq!(segments.len(), num_segments);

        let mut board = Self {
            rows,
            columns,
            segments,
            cells,
            current_player: first_player,
        };

        // The back-references of the segments pushed above.
        for row in 0..rows {
            for col in 0..columns {
                let top = board.horizontal_id(row, col);
                let bottom = board.horizontal_id(row + 1, col);
                let left = board.vertical_id(row, col);
                let right = board.vertical_id(row, col + 1);
                board.cells.push(Cell {
                    left,
                    top,
                    right,
                    bottom,
                    owner: None,
                });
            }
        }

        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    /// The player who is to make the next move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn segment(&self, segment_id: SegmentId) -> Option<&Segment> {
        self.segments.get(segment_id)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.columns {
            self.cells.get(row * self.columns + col)
        } else {
            None
        }
    }

    /// The id of the horizontal segment on grid line `line` (`0..=rows`),
    /// above the cells of column `col`.
    pub fn horizontal_segment(&self, line: usize, col: usize) -> Option<SegmentId> {
        (line <= self.rows && col < self.columns).then(|| self.horizontal_id(line, col))
    }

    /// The id of the vertical segment on grid line `line` (`0..=columns`),
    /// to the left of the cells of row `row`.
    pub fn vertical_segment(&self, row: usize, line: usize) -> Option<SegmentId> {
        (row < self.rows && line <= self.columns).then(|| self.vertical_id(row, line))
    }

    fn horizontal_id(&self, line: usize, col: usize) -> SegmentId {
        self.columns * line + col
    }

    fn vertical_id(&self, row: usize, line: usize) -> SegmentId {
        (self.rows + 1) * self.columns + row * (self.columns + 1) + line
    }

    /// Number of used borders of a cell that is known to exist.
    fn used_borders(&self, cell: &Cell) -> usize {
        cell.borders()
            .into_iter()
            .filter(|&id| self.segments[id].used)
            .count()
    }

    /// True iff all four borders of the cell are used.
    ///
    /// Cells outside the board are never complete.
    pub fn is_cell_complete(&self, row: usize, col: usize) -> bool {
        self.cell(row, col)
            .is_some_and(|cell| self.used_borders(cell) == 4)
    }

    /// The player who completed the cell, if any.
    pub fn owner_of(&self, row: usize, col: usize) -> Option<Player> {
        self.cell(row, col).and_then(|cell| cell.owner)
    }

    /// All unused segments, in ascending order.
    pub fn free_segments(&self) -> Vec<SegmentId> {
        self.segments
            .iter()
            .enumerate()
            .filter(|(_, segment)| !segment.used)
            .map(|(id, _)| id)
            .collect()
    }

    /// The game is over when every segment is used.
    pub fn is_game_over(&self) -> bool {
        self.segments.iter().all(|segment| segment.used)
    }

    /// All cells with exactly `n` used borders, in row-major order.
    pub fn cells_with_used_borders(&self, n: usize) -> Vec<CellPos> {
        let mut result = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.columns {
                let cell = &self.cells[row * self.columns + col];
                if self.used_borders(cell) == n {
                    result.push((row, col));
                }
            }
        }
        result
    }

    /// The free borders of all cells with exactly `n` used borders.
    ///
    /// With `n = 3` these are the moves that complete a cell, with `n = 2`
    /// the moves that leave a cell for the opponent to complete.
    pub fn free_segments_bordering_cells_with_used_borders(&self, n: usize) -> Vec<SegmentId> {
        let mut result = BTreeSet::new();
        for (row, col) in self.cells_with_used_borders(n) {
            let cell = &self.cells[row * self.columns + col];
            result.extend(
                cell.borders()
                    .into_iter()
                    .filter(|&id| !self.segments[id].used),
            );
        }
        result.into_iter().collect()
    }

    /// Claims a segment for the current player.
    ///
    /// Every cell completed by this segment goes to the current player, who
    /// then moves again. Otherwise it's the other player's turn.
    /// An illegal move leaves the board unchanged.
    pub fn apply_move(&mut self, segment_id: SegmentId) -> Result<MoveOutcome, IllegalMove> {
        let num_segments = self.segments.len();
        let segment = self
            .segments
            .get_mut(segment_id)
            .ok_or(IllegalMove::InvalidSegmentId {
                segment_id,
                num_segments,
            })?;
        if segment.used {
            return Err(IllegalMove::SegmentAlreadyUsed { segment_id });
        }
        segment.used = true;
        let neighbours = [segment.left, segment.above, segment.right, segment.below];

        let player = self.current_player;
        let mut completed_cells = Vec::new();
        for (row, col) in neighbours.into_iter().flatten() {
            if self.is_cell_complete(row, col) {
                let cell = &mut self.cells[row * self.columns + col];
                // The cell was missing this very segment before, so it can't have an owner
                debug_assert!(cell.owner.is_none());
                cell.owner = Some(player);
                completed_cells.push((row, col));
            }
        }

        if completed_cells.is_empty() {
            self.current_player = player.other();
        }

        Ok(MoveOutcome {
            player,
            completed_cells,
            next_player: self.current_player,
        })
    }

    /// Number of cells owned by player one and player two, in that order.
    ///
    /// Unclaimed cells are not counted.
    pub fn scores(&self) -> [usize; 2] {
        let mut scores = [0, 0];
        for owner in self.cells.iter().filter_map(|cell| cell.owner) {
            scores[owner.index()] += 1;
        }
        scores
    }

    /// Player one wins iff it owns more than half of all cells, otherwise player two wins.
    ///
    /// Unclaimed cells count for player two, and so does a tie. On a finished
    /// board every cell is claimed, so only the tie rule matters there.
    pub fn determine_winner(&self) -> Player {
        let player_one = self
            .cells
            .iter()
            .filter(|cell| cell.owner == Some(Player::One))
            .count();
        let others = self.cells.len() - player_one;
        if player_one > others {
            Player::One
        } else {
            Player::Two
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", crate::visualize(self))?;
        write!(f, "current player: {}", self.current_player.id())
    }
}
