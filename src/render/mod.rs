/// Trial-by-trial reveal renderer.
pub mod reveal;

/// Post-run statistics renderer.
pub mod stats;

/// Result of a finished run.
pub mod summary;

/// Rendering utilities.
pub mod util;
