use crate::Result;
use crate::misc::{ColorMode, format_count};
use crate::sample::{Gender, Sample};
use crate::summary::{Summaries, bucket_label};
use core::fmt::{self, Write};
use owo_colors::OwoColorize;
use std::io::{IsTerminal, stdout};
use strum::IntoEnumIterator;
use terminal_size::{Width, terminal_size};

const DEFAULT_TERMINAL_WIDTH: usize = 120;
const MAX_BAR_WIDTH: usize = 50;
const ROW_INDENT: usize = 2;
const COLUMN_GAP: usize = 2;
const BAR_CHAR: &str = "█";
const RULE_CHAR: &str = "─";
const TITLE_RULE_CHAR: &str = "═";

pub fn generate<W: Write>(sample: &Sample, summaries: &Summaries, color: ColorMode, top_countries: usize, writer: &mut W) -> Result<()> {
    ConsoleReporter::new(writer, color).generate_report(sample, summaries, top_countries)
}

struct ConsoleReporter<'a, W: Write> {
    writer: &'a mut W,
    colors: ColorScheme,
    layout: Layout,
}

impl<'a, W: Write> ConsoleReporter<'a, W> {
    fn new(writer: &'a mut W, color_mode: ColorMode) -> Self {
        Self {
            writer,
            colors: ColorScheme::new(color_mode),
            layout: Layout::new(),
        }
    }

    fn generate_report(&mut self, sample: &Sample, summaries: &Summaries, top_countries: usize) -> Result<()> {
        self.write_header(sample, summaries)?;

        if summaries.total_records == 0 {
            writeln!(self.writer)?;
            self.colors.write_styled_text(self.writer, "No records in sample.", TextStyle::Dimmed)?;
            writeln!(self.writer)?;
            return Ok(());
        }

        self.write_gender_section(summaries)?;
        self.write_age_section(summaries)?;
        self.write_country_section(summaries, top_countries)?;
        self.write_year_section(summaries)?;
        Ok(())
    }

    fn write_header(&mut self, sample: &Sample, summaries: &Summaries) -> Result<()> {
        let title = "Sample Demographics";
        self.colors.write_styled_text(self.writer, title, TextStyle::Bold)?;
        writeln!(self.writer)?;
        self.colors.write_styled_line(self.writer, TITLE_RULE_CHAR, title.len(), TextStyle::Dimmed)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "Records : {}", format_count(summaries.total_records))?;
        writeln!(self.writer, "Seed    : {}", sample.info.seed)?;
        writeln!(self.writer, "Fetched : {}", sample.fetched_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        Ok(())
    }

    fn write_section_title(&mut self, title: &str) -> Result<()> {
        writeln!(self.writer)?;
        self.colors.write_styled_text(self.writer, title, TextStyle::Bold)?;
        writeln!(self.writer)?;
        self.colors.write_styled_line(self.writer, RULE_CHAR, title.len(), TextStyle::Dimmed)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_gender_section(&mut self, summaries: &Summaries) -> Result<()> {
        self.write_section_title("Gender Split")?;

        let rows: Vec<(String, u64)> = Gender::iter()
            .map(|gender| (gender.to_string(), summaries.genders.count(gender)))
            .collect();

        self.write_bar_rows(&rows, summaries.genders.total())
    }

    fn write_age_section(&mut self, summaries: &Summaries) -> Result<()> {
        self.write_section_title("Age Distribution")?;

        let rows: Vec<(String, u64)> = summaries.ages.iter().map(|(bucket, count)| (bucket_label(bucket), count)).collect();

        self.write_bar_rows(&rows, summaries.ages.total())
    }

    fn write_country_section(&mut self, summaries: &Summaries, top_countries: usize) -> Result<()> {
        let distinct = summaries.countries.distinct();
        let shown = if top_countries == 0 { distinct } else { top_countries.min(distinct) };

        if shown < distinct {
            self.write_section_title(&format!("Countries  (top {shown} of {distinct})"))?;
        } else {
            self.write_section_title("Countries")?;
        }

        let rows: Vec<(&str, u64)> = summaries.countries.by_count().into_iter().take(shown).collect();
        let label_width = rows.iter().map(|(country, _)| country.len()).max().unwrap_or(0);
        let count_width = rows.iter().map(|&(_, count)| format_count(count).len()).max().unwrap_or(0);

        for (country, count) in rows {
            writeln!(
                self.writer,
                "{:ROW_INDENT$}{country:<label_width$}{:COLUMN_GAP$}{:>count_width$}",
                "",
                "",
                format_count(count)
            )?;
        }
        Ok(())
    }

    fn write_year_section(&mut self, summaries: &Summaries) -> Result<()> {
        self.write_section_title("Registrations by Year")?;

        let rows: Vec<(String, u64)> = summaries.years.iter().map(|(year, count)| (year.to_string(), count)).collect();

        self.write_bar_rows(&rows, summaries.years.total())
    }

    /// Render one labeled horizontal bar per row, scaled to the widest count.
    fn write_bar_rows(&mut self, rows: &[(String, u64)], total: u64) -> Result<()> {
        let max_count = rows.iter().map(|&(_, count)| count).max().unwrap_or(0);
        if max_count == 0 {
            self.colors.write_styled_text(self.writer, "  (none)", TextStyle::Dimmed)?;
            writeln!(self.writer)?;
            return Ok(());
        }

        let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        let count_width = rows.iter().map(|&(_, count)| format_count(count).len()).max().unwrap_or(0);
        let bar_width = self.layout.bar_width(label_width, count_width);

        for (label, count) in rows {
            let filled = scale(*count, max_count, bar_width);
            write!(self.writer, "{:ROW_INDENT$}{label:<label_width$}{:COLUMN_GAP$}", "", "")?;
            self.colors.write_bar(self.writer, filled, bar_width)?;
            writeln!(
                self.writer,
                "{:COLUMN_GAP$}{:>count_width$}  ({:.1}%)",
                "",
                format_count(*count),
                percent(*count, total)
            )?;
        }
        Ok(())
    }
}

/// Number of filled bar cells for `count`, never zero for a nonzero count.
#[expect(clippy::cast_possible_truncation, reason = "Quotient is bounded by bar_width")]
fn scale(count: u64, max_count: u64, bar_width: usize) -> usize {
    if count == 0 {
        return 0;
    }

    let filled = (u128::from(count) * bar_width as u128 / u128::from(max_count)) as usize;
    filled.max(1)
}

fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }

    #[expect(clippy::cast_precision_loss, reason = "Display-only percentage")]
    {
        count as f64 * 100.0 / total as f64
    }
}

#[derive(Copy, Clone)]
enum TextStyle {
    Bold,
    Dimmed,
}

struct ColorScheme {
    enabled: bool,
}

impl ColorScheme {
    fn new(color_mode: ColorMode) -> Self {
        let enabled = matches!(color_mode, ColorMode::Always) || (matches!(color_mode, ColorMode::Auto) && stdout().is_terminal());
        Self { enabled }
    }

    fn write_styled_text<W: Write>(&self, writer: &mut W, text: &str, style: TextStyle) -> fmt::Result {
        if !self.enabled {
            return write!(writer, "{text}");
        }
        match style {
            TextStyle::Bold => write!(writer, "{}", text.bold()),
            TextStyle::Dimmed => write!(writer, "{}", text.dimmed()),
        }
    }

    fn write_styled_line<W: Write>(&self, writer: &mut W, ch: &str, width: usize, style: TextStyle) -> fmt::Result {
        if !self.enabled {
            return write!(writer, "{}", ch.repeat(width));
        }
        match style {
            TextStyle::Bold => write!(writer, "{}", ch.repeat(width).bold()),
            TextStyle::Dimmed => write!(writer, "{}", ch.repeat(width).dimmed()),
        }
    }

    fn write_bar<W: Write>(&self, writer: &mut W, filled: usize, bar_width: usize) -> fmt::Result {
        let bar = BAR_CHAR.repeat(filled);
        if self.enabled {
            write!(writer, "{}", bar.cyan())?;
        } else {
            write!(writer, "{bar}")?;
        }
        write!(writer, "{:width$}", "", width = bar_width - filled)
    }
}

struct Layout {
    terminal_width: usize,
}

impl Layout {
    fn new() -> Self {
        Self {
            terminal_width: detect_terminal_width(),
        }
    }

    /// Bar cells available after the label and count columns are placed.
    fn bar_width(&self, label_width: usize, count_width: usize) -> usize {
        let overhead = ROW_INDENT + label_width + COLUMN_GAP + COLUMN_GAP + count_width + "  (100.0%)".len();
        self.terminal_width.saturating_sub(overhead).clamp(1, MAX_BAR_WIDTH)
    }
}

fn detect_terminal_width() -> usize {
    if stdout().is_terminal() {
        terminal_size().map_or(DEFAULT_TERMINAL_WIDTH, |(Width(w), _)| usize::from(w))
    } else {
        DEFAULT_TERMINAL_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_keeps_nonzero_counts_visible() {
        assert_eq!(scale(0, 100, 50), 0);
        assert_eq!(scale(1, 1000, 50), 1);
        assert_eq!(scale(100, 100, 50), 50);
        assert_eq!(scale(50, 100, 50), 25);
    }

    #[test]
    fn test_percent() {
        assert!((percent(1, 3) - 33.333).abs() < 0.01);
        assert!((percent(0, 0) - 0.0).abs() < f64::EPSILON);
    }
}
