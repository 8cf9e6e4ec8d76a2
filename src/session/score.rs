use crate::Count;
use crate::Outcome;
use crate::Probability;
use crate::WIN_RATE_PRECISION;

/// Cumulative wins, losses and ties for one session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    wins: Count,
    losses: Count,
    ties: Count,
}

impl Score {
    /// Counts one more game with the given outcome.
    pub fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
    pub fn wins(&self) -> Count {
        self.wins
    }
    pub fn losses(&self) -> Count {
        self.losses
    }
    pub fn ties(&self) -> Count {
        self.ties
    }
    pub fn total(&self) -> Count {
        self.wins + self.losses + self.ties
    }
    /// Percentage of games won, or `None` before the first game.
    pub fn win_rate(&self) -> Option<Probability> {
        match self.total() {
            0 => None,
            n => Some(100. * self.wins as Probability / n as Probability),
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Wins     {:>6}", self.wins)?;
        writeln!(f, "Losses   {:>6}", self.losses)?;
        writeln!(f, "Ties     {:>6}", self.ties)?;
        if let Some(rate) = self.win_rate() {
            writeln!(f, "Win Rate {:>5.*}%", WIN_RATE_PRECISION, rate)?;
        }
        Ok(())
    }
}
