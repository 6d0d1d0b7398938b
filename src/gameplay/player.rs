pub trait Player: Debug {
    fn act(&mut self) -> Action;
}

use super::action::Action;
use std::fmt::Debug;
