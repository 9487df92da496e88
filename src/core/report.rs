//! The resume reporter: one line per position, oldest first, then the
//! total years of experience.

use crate::core::clock::Clock;
use crate::core::history::History;
use crate::errors::AppResult;
use crate::models::Tenure;
use crate::utils::formatting::{end_label, tenure_line};
use std::io::Write;

/// Presentation constants for the rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStyle {
    /// Width of the right-aligned end-year field.
    pub end_width: usize,
    /// Text following the total on the summary line.
    pub caption: &'static str,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            end_width: 4,
            caption: "years of professional experience",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub tenures: Vec<Tenure>,
    pub current_year: i32,
    pub total_years: i32,
}

impl Report {
    /// Derive end years and sum the spans. The current position counts
    /// until `current_year`; it is still displayed without an end year.
    pub fn build(history: &History, current_year: i32) -> Self {
        let tenures: Vec<Tenure> = history.tenures().collect();
        let total_years = tenures.iter().map(|t| t.span(current_year)).sum();

        Self {
            tenures,
            current_year,
            total_years,
        }
    }

    pub fn render<W: Write>(&self, out: &mut W) -> AppResult<()> {
        let style = ReportStyle::default();

        for t in &self.tenures {
            let end = end_label(t.end_year, style.end_width);
            writeln!(out, "{}", tenure_line(t.start_year(), &end, t.name()))?;
        }

        writeln!(out, "{} {}", self.total_years, style.caption)?;
        out.flush()?;
        Ok(())
    }
}

/// Read the clock, then print the whole report to `out`.
///
/// The clock is read before anything is written, so a clock failure leaves
/// `out` untouched.
pub fn report<C: Clock, W: Write>(history: &History, clock: &C, out: &mut W) -> AppResult<i32> {
    let current_year = clock.current_year()?;

    let report = Report::build(history, current_year);
    tracing::debug!(
        current_year,
        positions = report.tenures.len(),
        total_years = report.total_years,
        "built report"
    );

    report.render(out)?;
    Ok(report.total_years)
}
