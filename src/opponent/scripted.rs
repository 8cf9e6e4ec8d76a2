use super::Opponent;
use crate::Move;

/// Replays a fixed list of throws, wrapping around at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scripted {
    moves: Vec<Move>,
    cursor: usize,
}

impl Scripted {
    /// Returns `None` for an empty script, which could never produce a move.
    pub fn new<I>(moves: I) -> Option<Self>
    where
        I: IntoIterator<Item = Move>,
    {
        let moves = moves.into_iter().collect::<Vec<_>>();
        (!moves.is_empty()).then(|| Self { moves, cursor: 0 })
    }
}

impl Opponent for Scripted {
    fn next_move(&mut self) -> Move {
        let hand = self.moves[self.cursor];
        self.cursor = (self.cursor + 1) % self.moves.len();
        hand
    }
}
