//! twenty48: a 2048 tile-grid engine
//!
//! This crate provides:
//! - A dense 4x4 `Grid` type with ergonomic methods (`shift`, `make_move`, `move_points`, ...)
//!   built from row primitives (stack/merge) and grid geometry (reverse/transpose)
//! - A `Game` session holding the grid, the running score, and the game-over flag
//! - A terminal front end (the `twenty48` binary) driving a session
//!
//! Quick start:
//! ```
//! use twenty48::engine::{Grid, Move};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Deterministic grid initialization with a seeded RNG
//! let mut rng = StdRng::seed_from_u64(42);
//! let g0 = Grid::EMPTY.with_random_tile(&mut rng).with_random_tile(&mut rng);
//! let g1 = g0.shift(Move::Left);
//! assert!(g1.count_empty() >= g0.count_empty());
//! ```
//!
//! Note: For convenience, there are also free functions mirroring the `Grid` methods
//! (e.g., `engine::move_left`, `engine::is_game_over`) plus the row-level primitives
//! (`engine::stack_left`, `engine::merge_left`). Prefer the seeded-RNG methods over
//! `with_random_tile_thread` when you need determinism.
//!
//! Full loop (simplest possible)
//! ```
//! use twenty48::engine::Move;
//! use twenty48::game::Game;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(123);
//! let mut game = Game::new(&mut rng);
//! let mut moves = 0u32;
//!
//! // Rotate directions for a couple of moves (keep doctests fast)
//! for dir in [Move::Left, Move::Up, Move::Right, Move::Down] {
//!     if game.apply(dir, &mut rng) {
//!         moves += 1;
//!     }
//! }
//! assert!(moves > 0);
//! assert!(game.score() + game.grid().count_empty() as u64 > 0);
//! ```
pub mod engine;
pub mod game;
