//! Round rules.
//!
//! The only rule in the game: the cyclic dominance relation that turns a
//! pair of moves into a win, loss or draw for the player.

pub mod resolver;

pub use resolver::{resolve, Outcome};
