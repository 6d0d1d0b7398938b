/// One of the four commands recognized at the table.
///
/// The three shapes resolve against each other through the fixed beats
/// relation. `Exit` ends the session and is handled by the table before
/// any resolution happens.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Action {
    Rock,
    Paper,
    Scissors,
    Exit,
}

impl Action {
    /// The three playable shapes in canonical order.
    pub const fn throws() -> [Action; 3] {
        [Action::Rock, Action::Paper, Action::Scissors]
    }
    /// Fixed relation: rock > scissors, scissors > paper, paper > rock.
    pub fn beats(&self, other: &Action) -> bool {
        match (self, other) {
            (Action::Rock, Action::Scissors) => true,
            (Action::Scissors, Action::Paper) => true,
            (Action::Paper, Action::Rock) => true,
            _ => false,
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Action {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Action::Rock),
            "paper" => Ok(Action::Paper),
            "scissors" => Ok(Action::Scissors),
            "exit" => Ok(Action::Exit),
            _ => Err(format!("invalid action str: {}", s.trim())),
        }
    }
}

/// Uniform over the three playable shapes. Never `Exit`.
impl Arbitrary for Action {
    fn random() -> Self {
        match rand::random_range(0..3) {
            0 => Action::Rock,
            1 => Action::Paper,
            _ => Action::Scissors,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Rock => write!(f, "rock"),
            Action::Paper => write!(f, "paper"),
            Action::Scissors => write!(f, "scissors"),
            Action::Exit => write!(f, "exit"),
        }
    }
}

use crate::Arbitrary;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_case() {
        for s in ["rock", "ROCK", "Rock", "rOcK"] {
            assert!(Action::try_from(s) == Ok(Action::Rock));
        }
        assert!(Action::try_from("Paper") == Ok(Action::Paper));
        assert!(Action::try_from("SCISSORS") == Ok(Action::Scissors));
        assert!(Action::try_from("Exit") == Ok(Action::Exit));
    }

    #[test]
    fn parses_padded_input() {
        assert!(Action::try_from("  rock  ") == Ok(Action::Rock));
        assert!(Action::try_from("\tscissors\n") == Ok(Action::Scissors));
    }

    #[test]
    fn rejects_unknown_tokens() {
        for s in ["banana", "", "rockk", "rock paper", "quit"] {
            assert!(Action::try_from(s).is_err());
        }
    }

    #[test]
    fn throws_exclude_exit() {
        assert!(Action::throws().len() == 3);
        assert!(!Action::throws().contains(&Action::Exit));
    }

    #[test]
    fn beats_is_a_cycle() {
        assert!(Action::Rock.beats(&Action::Scissors));
        assert!(Action::Scissors.beats(&Action::Paper));
        assert!(Action::Paper.beats(&Action::Rock));
        for a in Action::throws() {
            assert!(!a.beats(&a));
        }
    }
}
