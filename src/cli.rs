//! Terminal front end.
//!
//! Prompts for a move (or reads a batch from the command line), plays it
//! against the configured opponent, and prints the result, the statistics
//! panel and the newest-first history after every game.
use crate::players::*;
use crate::*;
use clap::Parser;
use colored::Colorize;

#[derive(Debug, Parser)]
#[command(name = "play", about = "Rock Paper Scissors against the computer")]
pub struct Args {
    /// Seed the computer's moves for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Number of recent games listed under the statistics.
    #[arg(long, default_value_t = HISTORY_DISPLAY_LIMIT)]
    pub history: usize,
    /// Play these moves without prompting, e.g. `--moves rock paper s`.
    #[arg(long, num_args = 1..)]
    pub moves: Vec<String>,
    /// Log every game at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    fn level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

pub struct CLI {
    session: Session<Box<dyn Opponent>>,
    history: usize,
}

impl From<&Args> for CLI {
    fn from(args: &Args) -> Self {
        let opponent: Box<dyn Opponent> = match args.seed {
            Some(seed) => Box::new(Seeded::from(seed)),
            None => Box::new(Random),
        };
        Self::new(Session::with(opponent), args.history)
    }
}

impl CLI {
    pub fn new(session: Session<Box<dyn Opponent>>, history: usize) -> Self {
        Self { session, history }
    }

    pub fn run() -> anyhow::Result<()> {
        let args = Args::parse();
        crate::log(args.level())?;
        log::info!("entering game");
        let mut cli = Self::from(&args);
        println!("{}", RULES);
        if args.moves.is_empty() {
            cli.interactive()
        } else {
            cli.batch(&args.moves);
            Ok(())
        }
    }

    pub fn session(&self) -> &Session<Box<dyn Opponent>> {
        &self.session
    }

    fn interactive(&mut self) -> anyhow::Result<()> {
        let human = Human;
        loop {
            match human.decide()? {
                Command::Play(hand) => {
                    let record = self.session.play(hand);
                    println!("{}", self.render(&record));
                }
                Command::Reset => {
                    self.session.reset();
                    println!("{}", self.panel());
                }
                Command::Quit => break,
            }
        }
        log::info!("leaving game after {} games", self.session.total());
        Ok(())
    }

    /// Plays each label in order. Unrecognized labels are logged and skipped.
    pub fn batch(&mut self, labels: &[String]) {
        for label in labels {
            match self.session.play_str(label) {
                Ok(record) => println!("{}", self.render(&record)),
                Err(e) => log::warn!("{}, skipping", e),
            }
        }
    }

    /// Face-off, banner, statistics and history for one finished game.
    pub fn render(&self, record: &Record) -> String {
        let banner = match record.outcome() {
            Outcome::Win => record.outcome().message().green().bold(),
            Outcome::Loss => record.outcome().message().red().bold(),
            Outcome::Tie => record.outcome().message().blue().bold(),
        };
        format!(
            "\n{} {}  VS  {} {}\n{}\n\n{}",
            record.player().glyph(),
            record.player().label(),
            record.opponent().glyph(),
            record.opponent().label(),
            banner,
            self.panel(),
        )
    }

    /// Statistics followed by the most recent games, newest first.
    pub fn panel(&self) -> String {
        let rows = self
            .session
            .recent(self.history)
            .map(|record| record.to_string())
            .collect::<Vec<String>>();
        match rows.is_empty() {
            true => format!("{}", self.session.score()),
            false => format!("{}\nGame History\n{}", self.session.score(), rows.join("\n")),
        }
    }
}
