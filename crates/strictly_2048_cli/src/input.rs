//! Line input parsing for game commands and setup prompts.

use std::ops::RangeInclusive;
use strictly_2048::Direction;
use tracing::instrument;

/// A discrete command read from one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Slide the grid.
    Move(Direction),
    /// Abandon this game and start over.
    NewGame,
    /// Leave the program.
    Quit,
}

impl Command {
    /// Maps a line to a command; `None` if the key is not bound.
    #[instrument]
    pub fn parse(line: &str) -> Option<Command> {
        match line.trim() {
            "w" => Some(Command::Move(Direction::Up)),
            "s" => Some(Command::Move(Direction::Down)),
            "a" => Some(Command::Move(Direction::Left)),
            "d" => Some(Command::Move(Direction::Right)),
            "n" => Some(Command::NewGame),
            "q" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Why a numeric setup answer was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// Not an integer at all.
    #[display("Input is not an integer value")]
    NotANumber,

    /// An integer outside the allowed range.
    #[display("{} must be between {} and {} (inclusive)", label, min, max)]
    OutOfRange {
        /// What was being asked for ("Size", "Number").
        label: &'static str,
        /// Smallest accepted value.
        min: u64,
        /// Largest accepted value.
        max: u64,
    },
}

impl std::error::Error for Rejection {}

/// A numeric question asked during custom game setup.
#[derive(Debug, Clone)]
pub struct NumberPrompt {
    /// Text shown before reading the answer.
    pub question: &'static str,
    /// Name used in range errors.
    pub label: &'static str,
    /// Accepted answers.
    pub range: RangeInclusive<u64>,
}

impl NumberPrompt {
    /// Board size question.
    pub fn size() -> Self {
        Self {
            question: "Enter a board size",
            label: "Size",
            range: 4..=10,
        }
    }

    /// Base number question.
    pub fn base() -> Self {
        Self {
            question: "Enter a game number (default is 2)",
            label: "Number",
            range: 2..=10,
        }
    }

    /// Parses an answer, checking it against the range.
    #[instrument(skip(self), fields(label = self.label))]
    pub fn parse(&self, line: &str) -> Result<u64, Rejection> {
        let value: u64 = line.trim().parse().map_err(|_| Rejection::NotANumber)?;
        if self.range.contains(&value) {
            Ok(value)
        } else {
            Err(Rejection::OutOfRange {
                label: self.label,
                min: *self.range.start(),
                max: *self.range.end(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_keys() {
        assert_eq!(Command::parse("w"), Some(Command::Move(Direction::Up)));
        assert_eq!(Command::parse("s"), Some(Command::Move(Direction::Down)));
        assert_eq!(Command::parse("a"), Some(Command::Move(Direction::Left)));
        assert_eq!(Command::parse("d"), Some(Command::Move(Direction::Right)));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(Command::parse("n"), Some(Command::NewGame));
        assert_eq!(Command::parse("q\n"), Some(Command::Quit));
    }

    #[test]
    fn test_unbound_input() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("W"), None);
        assert_eq!(Command::parse("wasd"), None);
    }

    #[test]
    fn test_size_prompt_bounds() {
        let prompt = NumberPrompt::size();
        assert_eq!(prompt.parse("4"), Ok(4));
        assert_eq!(prompt.parse(" 10 "), Ok(10));
        assert_eq!(
            prompt.parse("3"),
            Err(Rejection::OutOfRange {
                label: "Size",
                min: 4,
                max: 10
            })
        );
        assert_eq!(prompt.parse("four"), Err(Rejection::NotANumber));
        assert_eq!(prompt.parse("-5"), Err(Rejection::NotANumber));
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            NumberPrompt::base().parse("11").unwrap_err().to_string(),
            "Number must be between 2 and 10 (inclusive)"
        );
        assert_eq!(
            Rejection::NotANumber.to_string(),
            "Input is not an integer value"
        );
    }
}
