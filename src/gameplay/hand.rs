use super::error::InvalidMove;
use super::outcome::Outcome;
use crate::Arbitrary;

/// One of the three throws: rock, paper, scissors.
///
/// The set is closed, so every rule over moves is an exhaustive match.
/// The ordering (R < P < S) is arbitrary but consistent, and doubles as the
/// `u8` encoding used for uniform sampling.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "client", serde(rename_all = "lowercase"))]
pub enum Move {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Move {
    /// All three moves in canonical order.
    pub const fn all() -> [Move; 3] {
        [Move::Rock, Move::Paper, Move::Scissors]
    }
    /// The move this one defeats.
    pub const fn beats(&self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }
    /// Outcome from this move's side when thrown against `other`.
    pub fn versus(&self, other: &Move) -> Outcome {
        if self == other {
            Outcome::Tie
        } else if self.beats() == *other {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }
    /// Pictogram for display.
    pub fn glyph(&self) -> &'static str {
        match self {
            Move::Rock => "🪨",
            Move::Paper => "📄",
            Move::Scissors => "✂️",
        }
    }
    /// Capitalized name for display.
    pub fn label(&self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }
}

/// u8 isomorphism
impl From<u8> for Move {
    fn from(n: u8) -> Move {
        match n {
            0 => Move::Rock,
            1 => Move::Paper,
            2 => Move::Scissors,
            _ => unreachable!("invalid move"),
        }
    }
}
impl From<Move> for u8 {
    fn from(m: Move) -> u8 {
        m as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Move {
    type Error = InvalidMove;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "r" | "🪨" => Ok(Move::Rock),
            "paper" | "p" | "📄" => Ok(Move::Paper),
            "scissors" | "s" | "✂️" | "✂" => Ok(Move::Scissors),
            _ => Err(InvalidMove::from(s)),
        }
    }
}
impl std::str::FromStr for Move {
    type Err = InvalidMove;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        Self::from(rand::random_range(0..3u8))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Move::Rock => write!(f, "rock"),
            Move::Paper => write!(f, "paper"),
            Move::Scissors => write!(f, "scissors"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for hand in Move::all() {
            assert!(hand == Move::from(u8::from(hand)));
        }
    }

    #[test]
    fn bijective_str() {
        for hand in Move::all() {
            assert!(hand == Move::try_from(hand.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn parses_loosely() {
        assert_eq!(Move::try_from("  ROCK "), Ok(Move::Rock));
        assert_eq!(Move::try_from("p"), Ok(Move::Paper));
        assert_eq!(Move::try_from("✂️"), Ok(Move::Scissors));
        assert_eq!("Scissors".parse::<Move>(), Ok(Move::Scissors));
    }

    #[test]
    fn rejects_unknown() {
        assert_eq!(Move::try_from("lizard"), Err(InvalidMove::from("lizard")));
        assert_eq!(Move::try_from(""), Err(InvalidMove::from("")));
        assert!("spock".parse::<Move>().is_err());
    }

    #[test]
    fn beats_is_a_cycle() {
        for hand in Move::all() {
            assert!(hand.beats() != hand);
            assert!(hand.beats().beats().beats() == hand);
        }
    }

    #[test]
    fn random_is_uniform() {
        const N: usize = 30_000;
        const TOLERANCE: f32 = 0.02;
        let mut counts = [0usize; 3];
        for _ in 0..N {
            counts[u8::from(Move::random()) as usize] += 1;
        }
        for (i, n) in counts.iter().enumerate() {
            let freq = *n as f32 / N as f32;
            assert!((freq - 1. / 3.).abs() < TOLERANCE, "{:?}: {} not near 1/3", Move::from(i as u8), freq);
        }
    }
}
