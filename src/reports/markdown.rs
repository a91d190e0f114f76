//! Markdown report generator.

use super::escape::{escape_markdown_table, markdown_code};
use super::tables::{diff_tables, diff_title, snapshot_tables, Cell, Table};
use super::{DiffFormatter, ReportConfig, ReportError, ReportFormat};
use crate::diff::DiffResult;
use crate::model::MetadataSnapshot;
use std::fmt::Write;

/// Markdown report generator using GitHub-flavored tables.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new Markdown formatter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn render(title: &str, tables: &[Table], empty_message: &str) -> Result<String, ReportError> {
        let mut out = String::new();
        writeln!(out, "# {}", escape_markdown_table(title))?;

        if tables.is_empty() {
            writeln!(out)?;
            writeln!(out, "_{empty_message}_")?;
        }

        for table in tables {
            writeln!(out)?;
            writeln!(out, "## {}", table.title)?;
            writeln!(out)?;
            writeln!(out, "| {} |", table.headers.join(" | "))?;
            writeln!(
                out,
                "|{}",
                table.headers.iter().map(|_| " --- |").collect::<String>()
            )?;
            for row in &table.rows {
                let cells: Vec<String> = row.iter().map(cell).collect();
                writeln!(out, "| {} |", cells.join(" | "))?;
            }
        }

        Ok(out)
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn cell(cell: &Cell) -> String {
    match cell {
        Cell::Code(text) => markdown_code(text),
        Cell::Text(text) => escape_markdown_table(text),
        Cell::Empty => "-".to_string(),
    }
}

impl DiffFormatter for MarkdownFormatter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        Self::render(
            &diff_title(result, config),
            &diff_tables(result),
            "No configuration property changes.",
        )
    }

    fn generate_view_report(
        &self,
        snapshot: &MetadataSnapshot,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let title = config.title.as_deref().unwrap_or("Configuration properties");
        Self::render(title, &snapshot_tables(snapshot), "No configuration metadata.")
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
