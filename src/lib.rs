//! Terminal Rock-Paper-Scissors against a uniform-random opponent.
//!
//! The [`gameplay`] module holds round resolution and score bookkeeping;
//! [`players`] holds the computer opponent. The binary wires a
//! [`gameplay::Table`] to stdin and runs it to completion.

pub mod gameplay;
pub mod players;

/// Random instance generation for sampling shapes.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Initialize terminal logging.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
