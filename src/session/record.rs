use crate::Move;
use crate::Outcome;
use crate::TIMESTAMP_FORMAT;
use chrono::NaiveTime;

/// One finished game. Created once by [`Session::play`](super::Session::play)
/// and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    timestamp: NaiveTime,
    player: Move,
    opponent: Move,
    outcome: Outcome,
}

impl Record {
    /// Resolves the game and stamps it with the given time of day.
    pub fn new(timestamp: NaiveTime, player: Move, opponent: Move) -> Self {
        Self {
            timestamp,
            player,
            opponent,
            outcome: crate::resolve(player, opponent),
        }
    }
    /// Resolves the game and stamps it with the local wall-clock time.
    pub fn now(player: Move, opponent: Move) -> Self {
        Self::new(chrono::Local::now().time(), player, opponent)
    }
    pub fn timestamp(&self) -> NaiveTime {
        self.timestamp
    }
    pub fn player(&self) -> Move {
        self.player
    }
    pub fn opponent(&self) -> Move {
        self.opponent
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

/// display Record as a history row: time, player, opponent, result
impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}  {} {:<8}  {} {:<8}  {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.player.glyph(),
            self.player.label(),
            self.opponent.glyph(),
            self.opponent.label(),
            self.outcome.label(),
        )
    }
}
