use std::{
    io::{stdout, IsTerminal},
    time::Duration,
};

use clap::ValueEnum;

use crate::{alphabet::Alphabet, target::HELLO_WORLD};

/// Default pause after each trial.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(10);

/// Stores all values that are configurable. The default variant of this struct reproduces the
/// classic run: the `letters` alphabet, "Hello World!" and a 10ms pause.
#[derive(Clone, Debug)]
pub struct Config {
    pub alphabet: Alphabet,
    /// Raw target text. Validated against `alphabet` when the run starts.
    pub target: String,
    pub delay: Duration,
    pub color: ColorMode,
    /// Print statistics after the run.
    pub stats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            target: HELLO_WORLD.into(),
            delay: DEFAULT_DELAY,
            color: ColorMode::Auto,
            stats: false,
        }
    }
}

/// When trial lines get terminal styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolves the mode against the current stdout.
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}
