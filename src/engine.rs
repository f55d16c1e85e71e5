use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// A present tile value: a positive integer, conventionally a power of two.
pub type Tile = u32;

/// One row of four cells, left to right. `None` marks an empty cell.
pub type Row = [Option<Tile>; 4];

type Cells = [Row; 4];

/// Dense 4x4 2048 grid: four rows of four optional tiles, top to bottom.
///
/// Grids are plain values. Every operation consumes a grid and returns a
/// new one; a move that changes nothing returns a grid equal by value to
/// its input, which is how callers detect and reject no-op moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid(Cells);

impl Grid {
    /// A constant empty grid (all cells absent).
    pub const EMPTY: Grid = Grid([[None; 4]; 4]);

    /// Construct a `Grid` from four rows, top to bottom.
    #[inline]
    pub fn from_rows(rows: [Row; 4]) -> Self {
        Grid(rows)
    }

    /// The four rows of this grid, top to bottom.
    #[inline]
    pub fn rows(&self) -> [Row; 4] {
        self.0
    }

    /// The cell at `(row, col)`, both indexed `0..4` from the top left.
    #[inline]
    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        self.0[row][col]
    }

    /// Return the grid resulting from sliding/merging tiles in `dir` (no random insert).
    ///
    /// Example
    /// ```
    /// use twenty48::engine::{Grid, Move};
    /// let g = Grid::EMPTY;
    /// assert_eq!(g.shift(Move::Left), g);
    /// ```
    #[inline]
    pub fn shift(self, dir: Move) -> Self {
        match dir {
            Move::Up => move_up(self),
            Move::Down => move_down(self),
            Move::Left => move_left(self),
            Move::Right => move_right(self),
        }
    }

    /// Points a move in `dir` would earn, computed on this (pre-move) grid.
    #[inline]
    pub fn move_points(self, dir: Move) -> u64 {
        move_points(self, dir)
    }

    /// Return true if no move in any direction can change the grid.
    #[inline]
    pub fn is_game_over(self) -> bool {
        is_game_over(self)
    }

    /// Count the number of empty cells.
    #[inline]
    pub fn count_empty(self) -> usize {
        count_empty(self)
    }

    /// The highest tile value present, or `None` on an empty grid.
    #[inline]
    pub fn highest_tile(self) -> Option<Tile> {
        highest_tile(self)
    }

    /// Place `value` at a uniformly chosen empty cell, using the provided RNG.
    ///
    /// Identity on a full grid.
    pub fn with_tile_at_random_empty<R: Rng + ?Sized>(self, value: Tile, rng: &mut R) -> Self {
        let empty: Vec<(usize, usize)> = (0..4)
            .flat_map(|row| (0..4).map(move |col| (row, col)))
            .filter(|&(row, col)| self.0[row][col].is_none())
            .collect();
        if empty.is_empty() {
            return self;
        }
        let (row, col) = empty[rng.gen_range(0..empty.len())];
        let mut cells = self.0;
        cells[row][col] = Some(value);
        Grid(cells)
    }

    /// Insert a random 2 (75%) or 4 (25%) tile into a random empty cell, using the provided RNG.
    ///
    /// Deterministic example using a seeded RNG:
    /// ```
    /// use twenty48::engine::Grid;
    /// use rand::{SeedableRng, rngs::StdRng};
    /// let mut rng = StdRng::seed_from_u64(123);
    /// let g = Grid::EMPTY.with_random_tile(&mut rng).with_random_tile(&mut rng);
    /// assert_eq!(g.count_empty(), 14);
    /// ```
    #[inline]
    pub fn with_random_tile<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        let value = random_tile_value(rng);
        self.with_tile_at_random_empty(value, rng)
    }

    /// Convenience: like `with_random_tile` but uses thread-local RNG.
    #[inline]
    pub fn with_random_tile_thread(self) -> Self {
        let mut rng = rand::thread_rng();
        self.with_random_tile(&mut rng)
    }

    /// Perform a move then insert a random tile if the move changed the grid, using the provided RNG.
    ///
    /// ```
    /// use twenty48::engine::{Grid, Move};
    /// use rand::{SeedableRng, rngs::StdRng};
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let g0 = Grid::EMPTY.with_random_tile(&mut rng).with_random_tile(&mut rng);
    /// let _g1 = g0.make_move(Move::Up, &mut rng);
    /// ```
    #[inline]
    pub fn make_move<R: Rng + ?Sized>(self, direction: Move, rng: &mut R) -> Self {
        let moved = self.shift(direction);
        if moved != self {
            moved.with_random_tile(rng)
        } else {
            self
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.0.iter().flatten().map(format_cell).collect();
        write!(
            f,
            "\n{}|{}|{}|{}\n--------------------------------\n{}|{}|{}|{}\n--------------------------------\n{}|{}|{}|{}\n--------------------------------\n{}|{}|{}|{}\n",
            cells[0], cells[1], cells[2], cells[3],
            cells[4], cells[5], cells[6], cells[7],
            cells[8], cells[9], cells[10], cells[11],
            cells[12], cells[13], cells[14], cells[15]
        )
    }
}

fn format_cell(cell: &Option<Tile>) -> String {
    match cell {
        None => String::from("       "),
        Some(value) => {
            let mut x = value.to_string();
            while x.len() < 7 {
                match x.len() {
                    6 => x = format!(" {}", x),
                    _ => x = format!(" {} ", x),
                }
            }
            x
        }
    }
}

/// Shift all present tiles in a row to the left, preserving their order.
///
/// Stable on presence alone: values are never reordered relative to each
/// other, empty cells end up on the right.
pub fn stack_left(row: Row) -> Row {
    let mut out = [None; 4];
    let mut next = 0;
    for value in row.into_iter().flatten() {
        out[next] = Some(value);
        next += 1;
    }
    out
}

/// Merge equal adjacent tiles of an already-stacked row, leftmost first.
///
/// One left-to-right pass over original positions: each pair of equal
/// neighbors combines into the left cell at double the value and leaves a
/// gap behind, and the combined cell is not re-examined in the same pass,
/// so `[2, 2, 2, 2]` becomes `[4, None, 4, None]` rather than collapsing
/// further.
pub fn merge_left(mut row: Row) -> Row {
    for i in 0..3 {
        if row[i].is_some() && row[i] == row[i + 1] {
            row[i] = row[i].map(|value| value * 2);
            row[i + 1] = None;
        }
    }
    row
}

/// A full leftward row move: stack, merge, then stack again to close the
/// gaps left by merges.
pub fn row_left(row: Row) -> Row {
    stack_left(merge_left(stack_left(row)))
}

/// Flip the grid horizontally (reverse every row).
pub fn reverse(grid: Grid) -> Grid {
    Grid(grid.0.map(|mut row| {
        row.reverse();
        row
    }))
}

/// Flip the grid diagonally (matrix transpose).
pub fn transpose(grid: Grid) -> Grid {
    let mut out: Cells = [[None; 4]; 4];
    for (r, row) in grid.0.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            out[c][r] = cell;
        }
    }
    Grid(out)
}

/// Move the whole grid left by moving each row left.
pub fn move_left(grid: Grid) -> Grid {
    Grid(grid.0.map(row_left))
}

/// Move right by flipping the grid and moving left.
pub fn move_right(grid: Grid) -> Grid {
    reverse(move_left(reverse(grid)))
}

/// Move up by transposing the grid and moving left.
pub fn move_up(grid: Grid) -> Grid {
    transpose(move_left(transpose(grid)))
}

/// Move down by transposing the grid and moving right.
pub fn move_down(grid: Grid) -> Grid {
    transpose(move_right(transpose(grid)))
}

/// True if any cell is empty.
pub fn has_gaps(grid: Grid) -> bool {
    grid.0.iter().flatten().any(Option::is_none)
}

/// True if any two horizontally adjacent cells hold equal present values.
///
/// Adjacency is positional on the current grid, not post-compaction.
pub fn has_horizontal_merges(grid: Grid) -> bool {
    grid.0
        .iter()
        .any(|row| (0..3).any(|c| row[c].is_some() && row[c] == row[c + 1]))
}

/// True if any two vertically adjacent cells hold equal present values.
pub fn has_vertical_merges(grid: Grid) -> bool {
    (0..3).any(|r| (0..4).any(|c| grid.0[r][c].is_some() && grid.0[r][c] == grid.0[r + 1][c]))
}

/// True when the grid is full and no adjacent cells share a value, i.e.
/// no move can change it.
pub fn is_game_over(grid: Grid) -> bool {
    !(has_gaps(grid) || has_vertical_merges(grid) || has_horizontal_merges(grid))
}

/// Points earned by a leftward (or rightward) move of this grid: twice the
/// merged value, summed over every merge the move would perform.
///
/// Simulates one stacked pass per row, clearing each merged pair in the
/// working copy so it is counted once, exactly mirroring the merge rule.
/// Must be computed on the pre-move grid.
pub fn horizontal_points(grid: Grid) -> u64 {
    let mut rows = grid.0.map(stack_left);
    let mut points = 0u64;
    for row in rows.iter_mut() {
        for c in 0..3 {
            if let (Some(a), Some(b)) = (row[c], row[c + 1]) {
                if a == b {
                    points += u64::from(a) * 2;
                    row[c] = None;
                    row[c + 1] = None;
                }
            }
        }
    }
    points
}

/// Points earned by an upward (or downward) move of this grid.
pub fn vertical_points(grid: Grid) -> u64 {
    horizontal_points(transpose(grid))
}

/// Points a move in `direction` would earn, computed on the pre-move grid.
pub fn move_points(grid: Grid, direction: Move) -> u64 {
    match direction {
        Move::Left | Move::Right => horizontal_points(grid),
        Move::Up | Move::Down => vertical_points(grid),
    }
}

/// Count the number of empty cells.
pub fn count_empty(grid: Grid) -> usize {
    grid.0.iter().flatten().filter(|cell| cell.is_none()).count()
}

/// The highest tile value present, or `None` on an empty grid.
pub fn highest_tile(grid: Grid) -> Option<Tile> {
    grid.0.iter().flatten().flatten().max().copied()
}

fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_range(0..4) < 3 {
        2
    } else {
        4
    }
}
