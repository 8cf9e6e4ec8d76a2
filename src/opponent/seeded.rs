use super::Opponent;
use crate::Move;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Uniform throws from an owned generator, reproducible for a given seed.
#[derive(Debug, Clone)]
pub struct Seeded(SmallRng);

impl From<u64> for Seeded {
    fn from(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Opponent for Seeded {
    fn next_move(&mut self) -> Move {
        Move::from(self.0.random_range(0..3u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible() {
        let mut a = Seeded::from(42);
        let mut b = Seeded::from(42);
        for _ in 0..64 {
            assert_eq!(a.next_move(), b.next_move());
        }
    }

    #[test]
    fn uniform() {
        const N: usize = 12_000;
        const TOLERANCE: f32 = 0.025;
        let mut opponent = Seeded::from(7);
        let mut counts = [0usize; 3];
        for _ in 0..N {
            counts[u8::from(opponent.next_move()) as usize] += 1;
        }
        for n in counts {
            let freq = n as f32 / N as f32;
            assert!((freq - 1. / 3.).abs() < TOLERANCE, "{} not near 1/3", freq);
        }
    }
}
