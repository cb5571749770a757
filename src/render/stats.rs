use std::io::{stdout, Write};

use crossterm::{
    queue,
    style::{Print, Stylize},
    terminal::size,
};
use rgb::RGB;
use textplots::*;

use super::summary::RunSummary;

/// Narrowest chart textplots will draw.
const MIN_WIDTH: u32 = 32;

/// Renders statistics for a finished run.
pub struct StatsRenderer<'a> {
    summary: &'a RunSummary,
    /// Trials the run was expected to take.
    expected: usize,
    /// Style the header and chart with terminal colors.
    styled: bool,
}

impl<'a> StatsRenderer<'a> {
    pub fn new(summary: &'a RunSummary, expected: usize, styled: bool) -> Self {
        Self {
            summary,
            expected,
            styled,
        }
    }

    /// Prints the summary block, then the scan cost chart when there is anything to plot.
    pub fn render(&self) -> Result<(), std::io::Error> {
        let mut stdout = stdout();
        self.write_summary(&mut stdout)?;

        if self.summary.costs.is_empty() {
            return Ok(());
        }

        // scan cost per position, as steps, with the y axis anchored at zero
        let points = self.points();
        let shape = Shape::Steps(&points);
        let (width, height) = chart_size(size().ok());
        let xmax = self.summary.costs.len() as f32;
        let ymax = self.summary.costs.iter().copied().max().unwrap_or(1) as f32;
        if self.styled {
            Chart::new_with_y_range(width, height, 0., xmax, 0., ymax)
                .linecolorplot(&shape, RGB { r: 0, g: 255, b: 0 })
                .display();
        } else {
            Chart::new_with_y_range(width, height, 0., xmax, 0., ymax)
                .lineplot(&shape)
                .display();
        }
        Ok(())
    }

    /// Writes the header and summary lines to `out`.
    fn write_summary<W: Write>(&self, out: &mut W) -> Result<(), std::io::Error> {
        if self.styled {
            queue!(out, Print("\n"), Print(" STATS ".on_dark_grey().white()), Print("\n"))?;
        } else {
            queue!(out, Print("\n STATS \n"))?;
        }
        for line in self.lines() {
            queue!(out, Print(line), Print("\n"))?;
        }
        out.flush()
    }

    /// Summary lines, without styling.
    fn lines(&self) -> Vec<String> {
        let summary = self.summary;
        vec![
            format!("target:    {:?}", summary.target),
            format!("trials:    {} (expected {})", summary.trials, self.expected),
            format!("mean scan: {:.2}", summary.mean_cost()),
            format!(
                "time:      {:.2}s ({:.1} trials/s)",
                summary.time.as_secs_f32(),
                summary.rate()
            ),
        ]
    }

    /// One step per position, plus a closing point so the last step has a width.
    fn points(&self) -> Vec<(f32, f32)> {
        let costs = &self.summary.costs;
        let mut points: Vec<(f32, f32)> = costs
            .iter()
            .enumerate()
            .map(|(i, &cost)| (i as f32, cost as f32))
            .collect();
        if let Some(&last) = costs.last() {
            points.push((costs.len() as f32, last as f32));
        }
        points
    }
}

/// Chart dimensions in braille dots for the given terminal size.
fn chart_size(screen: Option<(u16, u16)>) -> (u32, u32) {
    let (cols, rows) = screen.unwrap_or((80, 24));
    let width = (cols as u32 * 2).saturating_sub(20).max(MIN_WIDTH);
    let height = (rows as u32 * 2).saturating_sub(20).clamp(16, 60);
    (width, height)
}
