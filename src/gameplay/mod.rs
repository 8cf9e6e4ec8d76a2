//! Moves and the outcome rule of Rock Paper Scissors.

pub mod error;
pub use error::*;

pub mod hand;
pub use hand::*;

pub mod outcome;
pub use outcome::*;
