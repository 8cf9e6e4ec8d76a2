use super::record::Record;
use super::score::Score;
use crate::*;

/// Score and history of one player's games against one opponent.
///
/// A session is owned by whatever hosts the game (a terminal loop, a
/// connection, a test) and is never shared. It changes only through
/// [`play`](Self::play) and [`reset`](Self::reset), and at all times the
/// number of counted games equals the length of the history.
///
/// History is stored oldest first. [`recent`](Self::recent) is the
/// newest-first projection used for display.
#[derive(Debug, Clone)]
pub struct Session<O = Random>
where
    O: Opponent,
{
    opponent: O,
    score: Score,
    history: Vec<Record>,
}

impl Default for Session<Random> {
    fn default() -> Self {
        Self::new()
    }
}

impl Session<Random> {
    /// Fresh session against the uniform random opponent.
    pub fn new() -> Self {
        Self::with(Random)
    }
}

impl<O> Session<O>
where
    O: Opponent,
{
    /// Fresh session against the given opponent.
    pub fn with(opponent: O) -> Self {
        Self {
            opponent,
            score: Score::default(),
            history: Vec::new(),
        }
    }

    /// Plays one game: draws the opponent's move, resolves it, counts it and
    /// appends it to history. Returns the new record.
    pub fn play(&mut self, player: Move) -> Record {
        let opponent = self.opponent.next_move();
        let record = Record::now(player, opponent);
        self.score.add(record.outcome());
        self.history.push(record);
        debug_assert!(self.score.total() == self.history.len());
        log::debug!("{} vs {}: {}", player, opponent, record.outcome());
        record
    }

    /// Parses `label` as a move and plays it. An unrecognized label leaves
    /// the session untouched.
    pub fn play_str(&mut self, label: &str) -> Result<Record, InvalidMove> {
        let player = Move::try_from(label)?;
        Ok(self.play(player))
    }

    /// Clears score and history.
    pub fn reset(&mut self) {
        log::info!("resetting session after {} games", self.total());
        self.score = Score::default();
        self.history.clear();
    }

    pub fn score(&self) -> &Score {
        &self.score
    }
    /// Every game so far, oldest first.
    pub fn history(&self) -> &[Record] {
        &self.history
    }
    pub fn total(&self) -> Count {
        self.score.total()
    }
    /// Percentage of games won, or `None` before the first game.
    pub fn win_rate(&self) -> Option<Probability> {
        self.score.win_rate()
    }
    /// The latest `n` games, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &Record> {
        self.history.iter().rev().take(n)
    }
    /// The games shown in the history table.
    pub fn recents(&self) -> impl Iterator<Item = &Record> {
        self.recent(HISTORY_DISPLAY_LIMIT)
    }
    pub fn opponent(&self) -> &O {
        &self.opponent
    }
}

impl<O> std::fmt::Display for Session<O>
where
    O: Opponent,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.score)?;
        if !self.history.is_empty() {
            writeln!(f)?;
            writeln!(f, "Game History")?;
            for record in self.recents() {
                writeln!(f, "{}", record)?;
            }
        }
        Ok(())
    }
}
