//! Play Binary
//!
//! Rock Paper Scissors in the terminal.
//! Options: --seed, --history, --moves, --verbose

fn main() -> anyhow::Result<()> {
    roshambo::cli::CLI::run()
}
