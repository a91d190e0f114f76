//! Report output stage.

use super::output::{should_use_color, write_output, OutputTarget};
use super::parse::ParsedSnapshot;
use crate::config::OutputConfig;
use crate::diff::DiffResult;
use crate::error::{ErrorContext, Result};
use crate::reports::{create_formatter_with_options, ReportConfig, ReportMetadata};

fn report_config(output: &OutputConfig, old: Option<&str>, new: Option<&str>) -> ReportConfig {
    ReportConfig {
        title: output.title.clone(),
        metadata: ReportMetadata {
            old_path: old.map(ToString::to_string),
            new_path: new.map(ToString::to_string),
            ..ReportMetadata::new()
        },
    }
}

fn use_color(output: &OutputConfig, target: &OutputTarget) -> bool {
    should_use_color(output.no_color) && target.is_terminal()
}

/// Render a diff report in the configured format.
pub fn render_diff_report(
    output: &OutputConfig,
    result: &DiffResult,
    old: &ParsedSnapshot,
    new: &ParsedSnapshot,
    use_color: bool,
) -> Result<String> {
    let formatter = create_formatter_with_options(output.format, use_color);
    let config = report_config(output, Some(old.origin()), Some(new.origin()));
    formatter
        .generate_diff_report(result, &config)
        .with_context(|| format!("{} report", output.format))
}

/// Render a diff report and write it to the configured destination.
pub fn output_report(
    output: &OutputConfig,
    quiet: bool,
    result: &DiffResult,
    old: &ParsedSnapshot,
    new: &ParsedSnapshot,
) -> Result<()> {
    let target = OutputTarget::from_option(output.file.clone());
    let report = render_diff_report(output, result, old, new, use_color(output, &target))?;
    write_output(&report, &target, quiet)
}

/// Render a single-snapshot report and write it to the configured destination.
pub fn output_view_report(
    output: &OutputConfig,
    quiet: bool,
    parsed: &ParsedSnapshot,
) -> Result<()> {
    let target = OutputTarget::from_option(output.file.clone());
    let formatter = create_formatter_with_options(output.format, use_color(output, &target));
    let config = report_config(output, Some(parsed.origin()), None);
    let report = formatter
        .generate_view_report(parsed.snapshot(), &config)
        .with_context(|| format!("{} view report", output.format))?;
    write_output(&report, &target, quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiffOptions;
    use crate::model::{MetadataProperty, MetadataSnapshot};
    use crate::pipeline::compute_diff;
    use crate::reports::ReportFormat;

    fn pair() -> (ParsedSnapshot, ParsedSnapshot) {
        let old = MetadataSnapshot::new();
        let mut new = MetadataSnapshot::new();
        new.add_property(MetadataProperty::new("server.port"));
        (
            ParsedSnapshot::new(old, "old.json").with_version("1.0"),
            ParsedSnapshot::new(new, "new.json").with_version("1.1"),
        )
    }

    #[test]
    fn test_render_markdown_report() {
        let (old, new) = pair();
        let result = compute_diff(&old, &new, &DiffOptions::default(), true);
        let output = OutputConfig {
            format: ReportFormat::Markdown,
            ..OutputConfig::default()
        };
        let report = render_diff_report(&output, &result, &old, &new, false).unwrap();
        assert!(report.starts_with("# Configuration property changes between 1.0 and 1.1"));
        assert!(report.contains("| `server.port` |"));
    }

    #[test]
    fn test_json_report_carries_paths() {
        let (old, new) = pair();
        let result = compute_diff(&old, &new, &DiffOptions::default(), true);
        let output = OutputConfig {
            format: ReportFormat::Json,
            title: Some("Release notes".to_string()),
            ..OutputConfig::default()
        };
        let report = render_diff_report(&output, &result, &old, &new, false).unwrap();
        let json: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(json["metadata"]["old_path"], "old.json");
        assert_eq!(json["metadata"]["new_path"], "new.json");
        assert_eq!(json["metadata"]["title"], "Release notes");
    }

    #[test]
    fn test_output_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("changes.adoc");
        let (old, new) = pair();
        let result = compute_diff(&old, &new, &DiffOptions::default(), true);
        let output = OutputConfig {
            format: ReportFormat::Asciidoc,
            file: Some(path.clone()),
            ..OutputConfig::default()
        };

        output_report(&output, true, &result, &old, &new).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("= Configuration property changes between 1.0 and 1.1"));
        assert!(!written.contains('\x1b'));
    }

    #[test]
    fn test_output_view_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view.txt");
        let (_, new) = pair();
        let output = OutputConfig {
            file: Some(path.clone()),
            ..OutputConfig::default()
        };

        output_view_report(&output, true, &new).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Properties:  1 (0 deprecated)"));
        assert!(written.contains("new.json"));
    }
}
