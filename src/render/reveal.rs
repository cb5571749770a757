use std::{
    io::Write,
    thread,
    time::{Duration, Instant},
};

use crossterm::{
    queue,
    style::{Print, Stylize},
};
use tracing::{debug, info};

use super::{summary::RunSummary, util::miss_color};
use crate::{
    alphabet::Alphabet,
    error::Result,
    search::{Search, Trial},
    target::Target,
};

/// Renders a reveal of the target: every trial the search makes is written as its own line,
/// followed by a pause.
pub struct RevealRenderer<'a> {
    alphabet: &'a Alphabet,
    target: &'a Target,
    /// Pause after each trial.
    delay: Duration,
    /// Style trial lines with terminal colors.
    styled: bool,
}

impl<'a> RevealRenderer<'a> {
    pub fn new(alphabet: &'a Alphabet, target: &'a Target, delay: Duration, styled: bool) -> Self {
        Self {
            alphabet,
            target,
            delay,
            styled,
        }
    }

    /// Runs the search to completion, writing to `out`.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let timer = Instant::now();
        let mut trials = 0;
        let mut costs = Vec::with_capacity(self.target.len());
        info!(
            target_len = self.target.len(),
            expected = self.target.scan_cost(self.alphabet),
            "starting reveal"
        );

        let mut search = Search::new(self.alphabet, self.target);
        for trial in search.by_ref() {
            self.print_trial(out, &trial)?;
            trials += 1;

            if trial.locked {
                debug!(
                    position = trial.position,
                    candidate = %trial.candidate,
                    attempt = trial.attempt,
                    "locked in"
                );
                costs.push(trial.attempt);
            }

            // paced runs show each trial as it is made
            if !self.delay.is_zero() {
                out.flush()?;
                thread::sleep(self.delay);
            }
        }
        out.flush()?;

        let summary = RunSummary {
            target: search.current().to_owned(),
            trials,
            costs,
            time: timer.elapsed(),
        };
        info!(trials, elapsed = ?summary.time, "reveal finished");
        Ok(summary)
    }

    /// Writes one trial line.
    fn print_trial<W: Write>(&self, out: &mut W, trial: &Trial) -> Result<()> {
        if !self.styled {
            writeln!(out, "{}", trial.text)?;
            return Ok(());
        }

        // the text is always the solved prefix plus one candidate
        let prefix = &trial.text[..trial.text.len() - trial.candidate.len_utf8()];
        let candidate = if trial.locked {
            trial.candidate.black().on_green()
        } else {
            trial
                .candidate
                .with(miss_color(trial.attempt, self.alphabet.len()))
        };
        queue!(out, Print(prefix.green()), Print(candidate), Print('\n'))?;
        Ok(())
    }
}
