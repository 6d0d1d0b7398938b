/// Result of a resolved round, from the hero's perspective.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Tie,
    Loss,
}

/// Resolution over (hero, villain) shape pairs.
impl From<(Action, Action)> for Outcome {
    fn from((hero, villain): (Action, Action)) -> Self {
        match (hero, villain) {
            (Action::Exit, _) | (_, Action::Exit) => unreachable!("exit never reaches resolution"),
            (hero, villain) if hero == villain => Outcome::Tie,
            (hero, villain) if hero.beats(&villain) => Outcome::Win,
            _ => Outcome::Loss,
        }
    }
}

use super::action::Action;
