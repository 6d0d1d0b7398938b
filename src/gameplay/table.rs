/// The table runs the session: prompt, resolve, tally, repeat.
///
/// Input is any buffered reader so sessions can be scripted; the villain
/// is any [`Player`]. End-of-input is treated the same as an explicit
/// `exit` so piped sessions terminate cleanly.
pub struct Table<I, P> {
    input: I,
    villain: P,
    score: Score,
}

impl<I, P> Table<I, P>
where
    I: BufRead,
    P: Player,
{
    pub fn new(input: I, villain: P) -> Self {
        Self {
            input,
            villain,
            score: Score::new(),
        }
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Run the session to completion.
    pub fn play(&mut self) {
        log::info!("taking a seat against {:?}", self.villain);
        loop {
            self.header();
            match self.prompt() {
                None | Some(Action::Exit) => break,
                Some(hero) => self.round(hero),
            }
        }
        self.summary();
    }

    /// Re-prompt until a recognized command. None on end-of-input.
    fn prompt(&mut self) -> Option<Action> {
        loop {
            print!("Your turn! Rock, paper, or scissors? ");
            std::io::stdout().flush().unwrap();
            let ref mut line = String::new();
            match self.input.read_line(line) {
                Err(_) | Ok(0) => return None,
                Ok(_) => match Action::try_from(line.as_str()) {
                    Ok(action) => return Some(action),
                    Err(_) => println!("{}", Self::GUIDANCE.yellow()),
                },
            }
        }
    }

    fn round(&mut self, hero: Action) {
        let villain = self.villain.act();
        let outcome = Outcome::from((hero, villain));
        println!("Computer chose '{}'", villain);
        match outcome {
            Outcome::Win => println!(
                "{}",
                format!("Computer says no. You win! {} beats {}.", hero, villain).green()
            ),
            Outcome::Tie => println!("{}", "Awkward. It's a tie!".magenta()),
            Outcome::Loss => println!(
                "{}",
                format!("Computer is happy. You lose! {} beats {}.", villain, hero).red()
            ),
        }
        self.score.tally(outcome);
        log::debug!("{} vs {} is a {:?}", hero, villain, outcome);
    }

    fn header(&self) {
        println!("\n{}\nROUND  {}", "-".repeat(21), self.score.rounds() + 1);
    }

    fn summary(&self) {
        println!("\n{}", "-".repeat(21));
        println!("{}", self.score);
        log::info!("leaving the table after {} round(s)", self.score.rounds());
    }

    const GUIDANCE: &'static str = "That is an invalid response! Please respond with either rock, paper, or scissors. If you want to exit the game, type 'exit'.";
}

use super::action::Action;
use super::outcome::Outcome;
use super::player::Player;
use super::score::Score;
use colored::*;
use std::io::BufRead;
use std::io::Write;
