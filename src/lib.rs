//! Reconstructs a target string one character at a time by scanning a fixed alphabet, printing
//! every guess along the way.

pub mod alphabet;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod search;
pub mod target;

pub use alphabet::{Alphabet, Preset};
pub use config::{ColorMode, Config};
pub use error::{Error, Result};
pub use render::{reveal::RevealRenderer, stats::StatsRenderer, summary::RunSummary};
pub use search::{Search, Trial};
pub use target::Target;

