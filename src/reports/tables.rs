//! Dialect-neutral tables shared by the document formatters.
//!
//! Building the rows once guarantees that every dialect lists the same
//! entries in the same order; formatters only decide how a table looks.

use super::ReportConfig;
use crate::diff::{ChangedField, DiffResult, PropertyChange};
use crate::model::{MetadataGroup, MetadataProperty, MetadataSnapshot, MetadataValue};
use crate::parsers::extract_short_description;

/// Content of one table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Cell {
    /// Identifier or literal value, rendered monospace
    Code(String),
    /// Free text
    Text(String),
    Empty,
}

impl Cell {
    fn code_opt(value: Option<&MetadataValue>) -> Self {
        value.map_or(Self::Empty, |v| Self::Code(v.to_string()))
    }

    fn text_opt(text: Option<String>) -> Self {
        match text {
            Some(text) if !text.is_empty() => Self::Text(text),
            _ => Self::Empty,
        }
    }
}

/// A titled table with a header row.
#[derive(Debug, Clone)]
pub(crate) struct Table {
    pub title: &'static str,
    pub headers: &'static [&'static str],
    pub rows: Vec<Vec<Cell>>,
}

/// Document title for a diff report.
pub(crate) fn diff_title(result: &DiffResult, config: &ReportConfig) -> String {
    if let Some(title) = &config.title {
        return title.clone();
    }
    match (&result.old_version, &result.new_version) {
        (Some(old), Some(new)) => {
            format!("Configuration property changes between {old} and {new}")
        }
        _ => "Configuration property changes".to_string(),
    }
}

/// Tables for every non-empty category of a diff, in report order.
pub(crate) fn diff_tables(result: &DiffResult) -> Vec<Table> {
    let tables = vec![
        Table {
            title: "Added Properties",
            headers: &["Key", "Default value", "Description"],
            rows: result
                .additions
                .iter()
                .map(|a| property_row(&a.property))
                .collect(),
        },
        Table {
            title: "Removed Properties",
            headers: &["Key", "Default value", "Description"],
            rows: result
                .deletions
                .iter()
                .map(|d| property_row(&d.property))
                .collect(),
        },
        Table {
            title: "Deprecated Properties",
            headers: &["Key", "Replacement", "Reason"],
            rows: result
                .deprecations
                .iter()
                .map(|d| {
                    let deprecation = d.deprecation();
                    vec![
                        Cell::Code(d.id().to_string()),
                        deprecation
                            .and_then(|dep| dep.replacement_id())
                            .map_or(Cell::Empty, |r| Cell::Code(r.to_string())),
                        Cell::text_opt(extract_short_description(
                            deprecation.and_then(|dep| dep.reason.as_deref()),
                        )),
                    ]
                })
                .collect(),
        },
        Table {
            title: "Changed Properties",
            headers: &["Key", "Field", "Old value", "New value"],
            rows: result.changes.iter().map(change_row).collect(),
        },
        Table {
            title: "Replaced Properties",
            headers: &["Key", "Replacement", "Reason"],
            rows: result
                .replacements
                .iter()
                .map(|r| {
                    vec![
                        Cell::Code(r.id().to_string()),
                        Cell::Code(r.replacement_id().to_string()),
                        Cell::text_opt(extract_short_description(
                            r.property
                                .deprecation
                                .as_ref()
                                .and_then(|dep| dep.reason.as_deref()),
                        )),
                    ]
                })
                .collect(),
        },
        Table {
            title: "Added Groups",
            headers: &["Group", "Type", "Description"],
            rows: result.groups.added.iter().map(group_row).collect(),
        },
        Table {
            title: "Removed Groups",
            headers: &["Group", "Type", "Description"],
            rows: result.groups.removed.iter().map(group_row).collect(),
        },
    ];
    tables.into_iter().filter(|t| !t.rows.is_empty()).collect()
}

/// Tables describing a single snapshot, sorted by id.
pub(crate) fn snapshot_tables(snapshot: &MetadataSnapshot) -> Vec<Table> {
    let mut groups: Vec<_> = snapshot.groups.values().collect();
    groups.sort_by(|a, b| a.id.cmp(&b.id));
    let mut properties: Vec<_> = snapshot.properties.values().collect();
    properties.sort_by(|a, b| a.id.cmp(&b.id));

    let tables = vec![
        Table {
            title: "Groups",
            headers: &["Group", "Type", "Description"],
            rows: groups.into_iter().map(group_row).collect(),
        },
        Table {
            title: "Properties",
            headers: &["Key", "Type", "Default value", "Description"],
            rows: properties
                .into_iter()
                .map(|p| {
                    vec![
                        Cell::Code(p.id.clone()),
                        Cell::Code(p.type_name.clone()),
                        Cell::code_opt(p.default_value.as_ref()),
                        Cell::text_opt(p.short_description()),
                    ]
                })
                .collect(),
        },
        Table {
            title: "Hints",
            headers: &["Key", "Values", "Providers"],
            rows: snapshot
                .hints
                .iter()
                .map(|h| {
                    let values: Vec<String> =
                        h.value_hints.iter().map(|v| v.value.to_string()).collect();
                    let providers: Vec<&str> =
                        h.value_providers.iter().map(|p| p.name.as_str()).collect();
                    vec![
                        Cell::Code(h.id.clone()),
                        Cell::text_opt(Some(values.join(", "))),
                        Cell::text_opt(Some(providers.join(", "))),
                    ]
                })
                .collect(),
        },
    ];
    tables.into_iter().filter(|t| !t.rows.is_empty()).collect()
}

fn property_row(property: &MetadataProperty) -> Vec<Cell> {
    vec![
        Cell::Code(property.id.clone()),
        Cell::code_opt(property.default_value.as_ref()),
        Cell::text_opt(property.short_description()),
    ]
}

fn group_row(group: &MetadataGroup) -> Vec<Cell> {
    vec![
        Cell::Code(group.id.clone()),
        group
            .type_name
            .as_ref()
            .map_or(Cell::Empty, |t| Cell::Code(t.clone())),
        Cell::text_opt(group.short_description()),
    ]
}

fn change_row(change: &PropertyChange) -> Vec<Cell> {
    let value = |v: Option<&MetadataValue>| match change.field {
        ChangedField::Description => Cell::text_opt(v.map(ToString::to_string)),
        _ => Cell::code_opt(v),
    };
    vec![
        Cell::Code(change.id.clone()),
        Cell::Text(change.field.name().to_string()),
        value(change.old_value.as_ref()),
        value(change.new_value.as_ref()),
    ]
}
