//! Game Binary
//!
//! Runs an interactive Rock-Paper-Scissors session on stdin/stdout
//! against a uniform-random computer opponent.

use roshambo::*;

const BANNER: &str = "\
Welcome to Rock, Paper, Scissors!

To exit the game, please type 'exit' in the terminal at any time.
";

fn main() {
    log();
    println!("{}", BANNER);
    gameplay::Table::new(std::io::stdin().lock(), players::Robot).play();
}
