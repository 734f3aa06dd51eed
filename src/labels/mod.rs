//! Foot labelling.
//!
//! Contacts are assigned to positional feet by order alone, so a person has
//! to say which positional foot is the left one before runs can be merged.
//! The question is asked through a [`FootLabeler`]; the console prompt is the
//! interactive one, [`FixedLabeler`] answers from configuration.

mod console;

pub use console::ConsolePrompt;

use anyhow::Result;

use crate::{metrics::RunMetrics, models::FootSide};

pub trait FootLabeler {
    /// Anatomical side of positional foot one in `run`.
    fn foot_one_side(&mut self, run: &RunMetrics) -> Result<FootSide>;
}

/// Gives the same answer for every run.
#[derive(Debug, Clone, Copy)]
pub struct FixedLabeler(pub FootSide);

impl FootLabeler for FixedLabeler {
    fn foot_one_side(&mut self, _run: &RunMetrics) -> Result<FootSide> {
        Ok(self.0)
    }
}
