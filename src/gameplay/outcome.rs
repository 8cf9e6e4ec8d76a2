use super::hand::Move;

/// Result of one game, always from the perspective of the first mover
/// passed to [`resolve`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "client", serde(rename_all = "lowercase"))]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

/// Resolves `player` against `opponent`. Total over all nine pairs.
pub fn resolve(player: Move, opponent: Move) -> Outcome {
    player.versus(&opponent)
}

impl Outcome {
    /// The same game seen from the other side.
    pub const fn flip(&self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
    /// Capitalized name for the history table.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Loss => "Loss",
            Outcome::Tie => "Tie",
        }
    }
    /// Banner shown right after a game.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Win => "🎉 Congratulations! You won!",
            Outcome::Loss => "😔 Better luck next time! Computer won.",
            Outcome::Tie => "🤝 It's a tie!",
        }
    }
}

/// (player, opponent) resolution
impl From<(Move, Move)> for Outcome {
    fn from((player, opponent): (Move, Move)) -> Self {
        resolve(player, opponent)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Loss => write!(f, "loss"),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_is_tie() {
        for m in Move::all() {
            assert_eq!(resolve(m, m), Outcome::Tie);
        }
    }

    #[test]
    fn antisymmetric() {
        for a in Move::all() {
            for b in Move::all().into_iter().filter(|b| *b != a) {
                let ab = resolve(a, b);
                let ba = resolve(b, a);
                assert!(ab != Outcome::Tie, "{} vs {} tied", a, b);
                assert_eq!(ab, ba.flip(), "{} vs {}", a, b);
                assert!((ab == Outcome::Win) ^ (ba == Outcome::Win));
            }
        }
    }

    #[test]
    fn each_move_wins_once() {
        for a in Move::all() {
            let wins = Move::all()
                .into_iter()
                .filter(|b| resolve(a, *b) == Outcome::Win)
                .count();
            assert_eq!(wins, 1, "{}", a);
        }
    }

    #[test]
    fn known_pairs() {
        assert_eq!(resolve(Move::Rock, Move::Scissors), Outcome::Win);
        assert_eq!(resolve(Move::Rock, Move::Paper), Outcome::Loss);
        assert_eq!(resolve(Move::Paper, Move::Paper), Outcome::Tie);
        assert_eq!(resolve(Move::Paper, Move::Rock), Outcome::Win);
        assert_eq!(resolve(Move::Scissors, Move::Paper), Outcome::Win);
        assert_eq!(Outcome::from((Move::Scissors, Move::Rock)), Outcome::Loss);
    }
}
