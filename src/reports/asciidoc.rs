//! AsciiDoc report generator.

use super::escape::{asciidoc_code, escape_asciidoc_table};
use super::tables::{diff_tables, diff_title, snapshot_tables, Cell, Table};
use super::{DiffFormatter, ReportConfig, ReportError, ReportFormat};
use crate::diff::DiffResult;
use crate::model::MetadataSnapshot;
use std::fmt::Write;

/// AsciiDoc report generator, one table per change category.
pub struct AsciiDocFormatter;

impl AsciiDocFormatter {
    /// Create a new AsciiDoc formatter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn render(title: &str, tables: &[Table], empty_message: &str) -> Result<String, ReportError> {
        let mut out = String::new();
        writeln!(out, "= {}", escape_asciidoc_table(title))?;

        if tables.is_empty() {
            writeln!(out)?;
            writeln!(out, "{empty_message}")?;
        }

        for table in tables {
            writeln!(out)?;
            writeln!(out, "== {}", table.title)?;
            writeln!(out)?;
            writeln!(out, "[options=\"header\"]")?;
            writeln!(out, "|===")?;
            writeln!(out, "{}", row_line(table.headers.iter().map(|h| (*h).to_string())))?;
            for row in &table.rows {
                writeln!(out, "{}", row_line(row.iter().map(cell)))?;
            }
            writeln!(out, "|===")?;
        }

        Ok(out)
    }
}

impl Default for AsciiDocFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn cell(cell: &Cell) -> String {
    match cell {
        Cell::Code(text) => asciidoc_code(text),
        Cell::Text(text) => escape_asciidoc_table(text),
        Cell::Empty => String::new(),
    }
}

fn row_line(cells: impl Iterator<Item = String>) -> String {
    cells
        .map(|c| format!("|{c}"))
        .collect::<Vec<_>>()
        .join(" ")
}

impl DiffFormatter for AsciiDocFormatter {
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
        ReportFormat::Asciidoc
    }
}
