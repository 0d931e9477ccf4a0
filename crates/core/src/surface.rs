//! The host-framework boundary: a sink for text, progress bars and tables.

use std::fmt::Write as _;

use crate::model::ProgressValue;
use crate::render::{DisplayRow, RenderedProfile, Section};
use crate::table::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Heading,
    Body,
    Strong,
    Code,
}

/// Display capabilities a host UI must provide.
pub trait RenderSurface {
    fn text(&mut self, style: TextStyle, text: &str);
    fn progress_bar(&mut self, value: ProgressValue);
    fn table(&mut self, table: &Table);
}

impl RenderedProfile {
    /// Emits the page to `surface` in display order.
    pub fn draw(&self, surface: &mut impl RenderSurface) {
        surface.text(TextStyle::Title, &self.title);

        surface.text(TextStyle::Heading, &Section::Identity.heading());
        for row in self.identity_columns.iter().flatten() {
            draw_row(surface, row);
        }

        surface.text(TextStyle::Heading, &Section::Skills.heading());
        for row in &self.skills {
            draw_row(surface, row);
        }

        surface.text(TextStyle::Heading, &Section::Course.heading());
        draw_row(surface, &self.course);

        surface.text(TextStyle::Heading, &Section::Tasks.heading());
        surface.table(&self.tasks);

        surface.text(TextStyle::Heading, &Section::Code.heading());
        surface.text(TextStyle::Code, &self.snippet.source);

        surface.text(TextStyle::Heading, &Section::System.heading());
        for line in &self.system_lines {
            surface.text(TextStyle::Body, line);
        }
    }
}

fn draw_row(surface: &mut impl RenderSurface, row: &DisplayRow) {
    let style = if row.emphasis {
        TextStyle::Strong
    } else {
        TextStyle::Body
    };
    surface.text(style, &row.title);
    if let Some(progress) = row.progress {
        surface.progress_bar(progress);
    }
    if let Some(caption) = row.caption.as_deref() {
        surface.text(TextStyle::Body, caption);
    }
}

//
// ─── PLAIN TEXT ───────────────────────────────────────────────────────────────
//

const BAR_WIDTH: usize = 20;
const COLUMN_GAP: &str = "  ";

/// Terminal rendering of a profile.
#[derive(Debug, Default)]
pub struct PlainTextSurface {
    out: String,
}

impl PlainTextSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}

impl RenderSurface for PlainTextSurface {
    fn text(&mut self, style: TextStyle, text: &str) {
        match style {
            TextStyle::Title => {
                let _ = writeln!(self.out, "{text}");
                let _ = writeln!(self.out, "{}", "=".repeat(text.chars().count()));
            }
            TextStyle::Heading => {
                let _ = writeln!(self.out);
                let _ = writeln!(self.out, "{text}");
                let _ = writeln!(self.out, "{}", "-".repeat(text.chars().count()));
            }
            TextStyle::Body => {
                let _ = writeln!(self.out, "{text}");
            }
            TextStyle::Strong => {
                let _ = writeln!(self.out, "*{text}*");
            }
            TextStyle::Code => {
                for line in text.lines() {
                    let _ = writeln!(self.out, "    {line}");
                }
            }
        }
    }

    fn progress_bar(&mut self, value: ProgressValue) {
        let _ = writeln!(self.out, "{}", text_bar(value));
    }

    fn table(&mut self, table: &Table) {
        let mut widths: Vec<usize> = table
            .columns
            .iter()
            .map(|col| col.name.chars().count())
            .collect();
        for row in &table.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header: Vec<&str> = table.columns.iter().map(|col| col.name.as_str()).collect();
        write_table_line(&mut self.out, &widths, header.as_slice());
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_table_line(&mut self.out, &widths, rule.as_slice());
        for row in &table.rows {
            write_table_line(&mut self.out, &widths, row.as_slice());
        }
    }
}

/// `[####----------------]  20%`
#[must_use]
pub fn text_bar(value: ProgressValue) -> String {
    // fraction is in [0, 1], so the product fits in BAR_WIDTH.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let filled = (value.fraction() * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        value.percent()
    )
}

fn write_table_line<S: AsRef<str>>(out: &mut String, widths: &[usize], cells: &[S]) {
    let line = widths
        .iter()
        .zip(cells)
        .map(|(width, cell)| {
            let cell = cell.as_ref();
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    let _ = writeln!(out, "{}", line.trim_end());
}
