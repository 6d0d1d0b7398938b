/// Running tally for the session.
///
/// Counters start at zero and each resolved round bumps exactly one of
/// them, so their sum is always the number of rounds played.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub wins: u32,
    pub ties: u32,
    pub losses: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn tally(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Loss => self.losses += 1,
        }
    }
    pub fn rounds(&self) -> u32 {
        self.wins + self.ties + self.losses
    }
}

/// Closing report: three counters and a farewell.
impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Your scores:")?;
        writeln!(f, " - {}", format!("{} win(s)", self.wins).green())?;
        writeln!(f, " - {}", format!("{} tie(s)", self.ties).magenta())?;
        writeln!(f, " - {}", format!("{} loss(es)", self.losses).red())?;
        writeln!(f, " - {} round(s) played", self.rounds())?;
        write!(f, "{}", "Goodbye!".cyan())
    }
}

use super::outcome::Outcome;
use colored::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_bumps_one_counter() {
        let mut score = Score::new();
        score.tally(Outcome::Win);
        score.tally(Outcome::Win);
        score.tally(Outcome::Loss);
        assert!(score.wins == 2);
        assert!(score.ties == 0);
        assert!(score.losses == 1);
    }

    #[test]
    fn rounds_is_sum_of_counters() {
        let mut score = Score::new();
        let outcomes = [Outcome::Win, Outcome::Tie, Outcome::Tie, Outcome::Loss];
        for (n, outcome) in outcomes.into_iter().enumerate() {
            score.tally(outcome);
            assert!(score.rounds() == n as u32 + 1);
        }
    }

    #[test]
    fn starts_at_zero() {
        let score = Score::new();
        assert!(score.rounds() == 0);
    }
}
