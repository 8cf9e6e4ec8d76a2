use super::Opponent;
use crate::Arbitrary;
use crate::Move;

/// Uniform throws from the process-wide thread-local generator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Random;

impl Opponent for Random {
    fn next_move(&mut self) -> Move {
        Move::random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_move() {
        let ref mut opponent = Random;
        let seen = (0..256)
            .map(|_| opponent.next_move())
            .collect::<std::collections::BTreeSet<_>>();
        assert_eq!(seen.len(), 3);
    }
}
