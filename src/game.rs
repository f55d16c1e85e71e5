//! A playable session on top of the engine: the current grid, the running
//! score, and the game-over flag.

use rand::Rng;

use crate::engine::{self, Grid, Move};

/// State owned by one game of 2048.
///
/// The engine itself is stateless; `Game` holds the grid between moves and
/// enforces the accept/reject rule: a move that leaves the grid unchanged
/// earns no points and spawns no tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: Grid,
    score: u64,
    over: bool,
}

impl Game {
    /// Start a game: an empty grid with two value-2 tiles at distinct
    /// random empty cells.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let grid = Grid::EMPTY
            .with_tile_at_random_empty(2, rng)
            .with_tile_at_random_empty(2, rng);
        Game {
            grid,
            score: 0,
            over: false,
        }
    }

    /// The current grid.
    #[inline]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// The accumulated score.
    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// True once no move can change the grid.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Apply one player move.
    ///
    /// Accepted moves (the shift changes the grid) add the move's points to
    /// the score, replace the grid, and spawn one random tile; the return
    /// value is `true`. A move that changes nothing is rejected: `false`,
    /// and no state is touched. All moves are rejected once the game is
    /// over.
    pub fn apply<R: Rng + ?Sized>(&mut self, direction: Move, rng: &mut R) -> bool {
        if self.over {
            return false;
        }
        let next = self.grid.shift(direction);
        if next == self.grid {
            return false;
        }
        self.score += engine::move_points(self.grid, direction);
        self.grid = next.with_random_tile(rng);
        self.over = engine::is_game_over(self.grid);
        true
    }
}
