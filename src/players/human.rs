use crate::Move;
use dialoguer::Select;

/// What the person at the keyboard asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Move),
    Reset,
    Quit,
}

impl Command {
    /// Menu entries, indexed the same way as `From<usize>`.
    pub fn labels() -> Vec<String> {
        Move::all()
            .iter()
            .map(|m| format!("{} {}", m.glyph(), m.label()))
            .chain(["🔄 Reset Game".to_string(), "Quit".to_string()])
            .collect()
    }
}

/// menu index
impl From<usize> for Command {
    fn from(i: usize) -> Self {
        match i {
            0..=2 => Command::Play(Move::from(i as u8)),
            3 => Command::Reset,
            _ => Command::Quit,
        }
    }
}

#[derive(Debug, Default)]
pub struct Human;

impl Human {
    pub fn decide(&self) -> anyhow::Result<Command> {
        let choice = Select::new()
            .with_prompt("🎯 Make your choice!")
            .report(false)
            .items(&Command::labels())
            .default(0)
            .interact()?;
        Ok(Command::from(choice))
    }
}
