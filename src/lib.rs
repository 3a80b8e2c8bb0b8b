//! Conway's Game of Life on a fixed-size board, with counting of connected
//! groups ("communities") of live cells.
//!
//! ```
//! use gridlife::{Adjacency, Universe};
//!
//! let mut uni = Universe::seed();
//! assert_eq!(uni.num_of_communities(Adjacency::Bounded), 3);
//! uni.next_generations(4);
//! assert!(!uni.is_alive());
//! ```

pub mod community;
pub mod config;
pub mod error;
pub mod grid;
pub mod rle;
pub mod rule;
pub mod text;
pub mod topology;
pub mod union_find;
pub mod universe;

pub use config::Config;
pub use error::{Error, Result};
pub use grid::Grid;
pub use rule::{Rule, GAME_OF_LIFE};
pub use topology::Adjacency;
pub use union_find::UnionFind;
pub use universe::Universe;
