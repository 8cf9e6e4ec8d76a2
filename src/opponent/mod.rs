//! Sources of the computer's moves.
//!
//! A [`Session`](crate::Session) never reaches for randomness directly; it asks
//! its [`Opponent`] for the next throw. Swapping the opponent is how tests pin
//! down the sequence and how the CLI makes a run reproducible.

mod random;
mod scripted;
mod seeded;

pub use random::*;
pub use scripted::*;
pub use seeded::*;

use crate::Move;

/// Supplies the opponent's throw for each game.
///
/// Implementations must not look at the player's move or at history.
pub trait Opponent {
    fn next_move(&mut self) -> Move;
}

impl<O> Opponent for &mut O
where
    O: Opponent + ?Sized,
{
    fn next_move(&mut self) -> Move {
        (**self).next_move()
    }
}

impl<O> Opponent for Box<O>
where
    O: Opponent + ?Sized,
{
    fn next_move(&mut self) -> Move {
        (**self).next_move()
    }
}
