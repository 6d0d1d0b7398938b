pub struct Robot;

impl Player for Robot {
    fn act(&mut self) -> Action {
        Action::random()
    }
}

impl Debug for Robot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Computer")
    }
}

use crate::Arbitrary;
use crate::gameplay::action::Action;
use crate::gameplay::player::Player;
use std::fmt::Debug;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_exits() {
        let mut robot = Robot;
        for _ in 0..100 {
            assert!(Action::throws().contains(&robot.act()));
        }
    }
}
