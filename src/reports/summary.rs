//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{DiffFormatter, ReportConfig, ReportError, ReportFormat};
use crate::diff::DiffResult;
use crate::model::MetadataSnapshot;
use unicode_width::UnicodeWidthStr;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Pad `text` with spaces to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let used = text.width();
    format!("{text}{}", " ".repeat(width.saturating_sub(used)))
}

const fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 {
        one
    } else {
        many
    }
}

/// Summary formatter for shell output
pub struct SummaryFormatter {
    /// Use colored output
    colored: bool,
}

impl SummaryFormatter {
    /// Create a new summary formatter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    /// One line per entry: a marker, the id padded to the widest id, details.
    fn section(&self, lines: &mut Vec<String>, title: &str, entries: &[Entry<'_>]) {
        if entries.is_empty() {
            return;
        }
        lines.push(String::new());
        lines.push(self.color(title, "bold"));
        let width = entries.iter().map(|e| e.id.width()).max().unwrap_or(0);
        for entry in entries {
            let marker = self.color(entry.marker, entry.color);
            if entry.detail.is_empty() {
                lines.push(format!("  {marker} {}", entry.id));
            } else {
                lines.push(format!("  {marker} {}  {}", pad(entry.id, width), entry.detail));
            }
        }
    }

    fn count_line(
        &self,
        lines: &mut Vec<String>,
        count: usize,
        sign: &str,
        color: &str,
        text: &str,
    ) {
        if count > 0 {
            lines.push(format!(
                "  {} {text}",
                self.color(&format!("{sign}{count}"), color)
            ));
        }
    }
}

impl Default for SummaryFormatter {
    fn default() -> Self {
        Self::new()
    }
}

struct Entry<'a> {
    marker: &'static str,
    color: &'static str,
    id: &'a str,
    detail: String,
}

impl DiffFormatter for SummaryFormatter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let summary = &result.summary;

        // Header
        lines.push(self.color(
            config.title.as_deref().unwrap_or("Configuration Metadata Diff"),
            "bold",
        ));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        if let (Some(old), Some(new)) = (&result.old_version, &result.new_version) {
            lines.push(format!("{}  {old} → {new}", self.color("Versions:", "cyan")));
        }
        lines.push(format!(
            "{}      {} → {} properties",
            self.color("Size:", "cyan"),
            summary.old_property_count,
            summary.new_property_count
        ));

        lines.push(String::new());
        lines.push(self.color("Changes:", "bold"));

        let added = summary.properties_added;
        let removed = summary.properties_removed;
        let replaced = summary.properties_replaced;
        let deprecated = summary.properties_deprecated;
        let changed = summary.properties_changed;
        let props = |n| plural(n, "property", "properties");
        let groups = |n| plural(n, "group", "groups");
        self.count_line(&mut lines, added, "+", "green", &format!("{} added", props(added)));
        self.count_line(&mut lines, removed, "-", "red", &format!("{} removed", props(removed)));
        self.count_line(
            &mut lines,
            replaced,
            "→",
            "yellow",
            &format!("{} replaced", props(replaced)),
        );
        self.count_line(
            &mut lines,
            deprecated,
            "!",
            "yellow",
            &format!("{} deprecated", props(deprecated)),
        );
        self.count_line(
            &mut lines,
            changed,
            "~",
            "yellow",
            &format!(
                "{} changed ({} {})",
                props(changed),
                summary.field_changes,
                plural(summary.field_changes, "field", "fields")
            ),
        );
        self.count_line(
            &mut lines,
            summary.groups_added,
            "+",
            "green",
            &format!("{} added", groups(summary.groups_added)),
        );
        self.count_line(
            &mut lines,
            summary.groups_removed,
            "-",
            "red",
            &format!("{} removed", groups(summary.groups_removed)),
        );
        if !result.has_changes() {
            lines.push(format!("  {}", self.color("No changes", "dim")));
        }

        let additions: Vec<_> = result
            .additions
            .iter()
            .map(|a| Entry {
                marker: "+",
                color: "green",
                id: a.id(),
                detail: a.property.type_name.clone(),
            })
            .collect();
        self.section(&mut lines, "Added properties:", &additions);

        let deletions: Vec<_> = result
            .deletions
            .iter()
            .map(|d| Entry {
                marker: "-",
                color: "red",
                id: d.id(),
                detail: String::new(),
            })
            .collect();
        self.section(&mut lines, "Removed properties:", &deletions);

        let deprecations: Vec<_> = result
            .deprecations
            .iter()
            .map(|d| {
                let deprecation = d.deprecation();
                let level = deprecation.map(|dep| dep.level.as_str()).unwrap_or_default();
                Entry {
                    marker: "!",
                    color: "yellow",
                    id: d.id(),
                    detail: match deprecation.and_then(|dep| dep.replacement_id()) {
                        Some(replacement) => format!("{level}, use {replacement}"),
                        None => level.to_string(),
                    },
                }
            })
            .collect();
        self.section(&mut lines, "Deprecated properties:", &deprecations);

        let changes: Vec<_> = result
            .changes
            .iter()
            .map(|c| {
                let show = |v: Option<&crate::model::MetadataValue>| {
                    v.map_or_else(|| "(none)".to_string(), ToString::to_string)
                };
                Entry {
                    marker: "~",
                    color: "yellow",
                    id: &c.id,
                    detail: format!(
                        "{}: {} → {}",
                        c.field,
                        show(c.old_value.as_ref()),
                        show(c.new_value.as_ref())
                    ),
                }
            })
            .collect();
        self.section(&mut lines, "Changed properties:", &changes);

        let replacements: Vec<_> = result
            .replacements
            .iter()
            .map(|r| Entry {
                marker: "→",
                color: "yellow",
                id: r.id(),
                detail: r.replacement_id().to_string(),
            })
            .collect();
        self.section(&mut lines, "Replaced properties:", &replacements);

        let groups: Vec<_> = result
            .groups
            .added
            .iter()
            .map(|g| Entry {
                marker: "+",
                color: "green",
                id: &g.id,
                detail: String::new(),
            })
            .chain(result.groups.removed.iter().map(|g| Entry {
                marker: "-",
                color: "red",
                id: &g.id,
                detail: String::new(),
            }))
            .collect();
        self.section(&mut lines, "Groups:", &groups);

        Ok(lines.join("\n"))
    }

    fn generate_view_report(
        &self,
        snapshot: &MetadataSnapshot,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color(
            config.title.as_deref().unwrap_or("Configuration Metadata"),
            "bold",
        ));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        if let Some(path) = &config.metadata.old_path {
            lines.push(format!("{}        {path}", self.color("File:", "cyan")));
        }
        lines.push(format!(
            "{}      {}",
            self.color("Groups:", "cyan"),
            snapshot.group_count()
        ));
        lines.push(format!(
            "{}  {} ({} deprecated)",
            self.color("Properties:", "cyan"),
            snapshot.property_count(),
            snapshot.deprecated_count()
        ));
        lines.push(format!(
            "{}       {}",
            self.color("Hints:", "cyan"),
            snapshot.hints.len()
        ));

        let orphans: Vec<_> = snapshot
            .hints
            .iter()
            .filter(|h| {
                !snapshot
                    .properties
                    .keys()
                    .any(|id| h.applies_to(id))
            })
            .map(|h| Entry {
                marker: "?",
                color: "dim",
                id: &h.id,
                detail: String::new(),
            })
            .collect();
        self.section(&mut lines, "Hints without a matching property:", &orphans);

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
