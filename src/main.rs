//! config-metadata-diff: changelog generator for configuration property metadata
//!
//! Compares the configuration metadata of two releases and reports added,
//! removed, deprecated and changed properties.

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use config_metadata_diff::{
    cli,
    config::{self, AppConfig, AppConfigBuilder, Validatable},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "config-metadata-diff")]
#[command(version)]
#[command(about = "Diff configuration property metadata between releases", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success (changes only fail the run with --fail-on-change)
    1  Changes detected with --fail-on-change
    2  Error occurred

EXAMPLES:
    # Summarize changes between two metadata files
    config-metadata-diff diff old/metadata.json new/metadata.json

    # AsciiDoc changelog between two versions kept in a directory
    config-metadata-diff diff-versions 3.1.0 3.2.0 --metadata-dir meta -o adoc -O changes.adoc

    # CI check that fails when anything changed
    config-metadata-diff diff old.json new.json --fail-on-change -q")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that reads and reports metadata
#[derive(Args)]
struct ReportArgs {
    /// Output format [default: summary]
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Character encoding of the metadata documents [default: UTF-8]
    #[arg(long)]
    charset: Option<String>,

    /// Report title (derived from the versions if omitted)
    #[arg(long)]
    title: Option<String>,
}

/// Options of the diff commands
#[derive(Args)]
struct DiffOptionArgs {
    /// Exit with code 1 if any changes detected
    #[arg(long)]
    fail_on_change: bool,

    /// Report added and removed groups [default: true]
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    include_groups: Option<bool>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two metadata files
    Diff {
        /// Metadata of the older release
        old: PathBuf,

        /// Metadata of the newer release
        new: PathBuf,

        #[command(flatten)]
        report: ReportArgs,

        #[command(flatten)]
        options: DiffOptionArgs,
    },

    /// Compare two versions stored in a metadata directory
    DiffVersions {
        /// Older version
        old_version: String,

        /// Newer version
        new_version: String,

        /// Directory holding one metadata file per version
        #[arg(long, env = "CONFIG_METADATA_DIR")]
        metadata_dir: Option<PathBuf>,

        /// File name template inside the directory, `{version}` is substituted
        #[arg(long)]
        template: Option<String>,

        #[command(flatten)]
        report: ReportArgs,

        #[command(flatten)]
        options: DiffOptionArgs,
    },

    /// Summarize a single metadata file
    View {
        /// Metadata file
        file: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Print the JSON schema of the configuration file
    ConfigSchema {
        /// Write the schema to a file instead of stdout
        #[arg(short = 'O', long)]
        output: Option<PathBuf>,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration (defaults merged with the config file)
    Show,
    /// Generate an example .config-metadata-diff.yaml in the current directory
    Init,
}

/// Layer command-line flags over the discovered config file.
fn resolve_config(cli: &Cli, report: &ReportArgs) -> Result<AppConfig> {
    let (file_config, loaded_from) = config::load_or_default(cli.config.as_deref())?;
    if let Some(path) = &loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    let mut builder = AppConfigBuilder::from(file_config).quiet(cli.quiet);
    if cli.no_color {
        builder = builder.no_color(true);
    }
    if let Some(format) = report.output {
        builder = builder.output_format(format);
    }
    if report.output_file.is_some() {
        builder = builder.output_file(report.output_file.clone());
    }
    if let Some(charset) = &report.charset {
        builder = builder.charset(charset.as_str());
    }
    if report.title.is_some() {
        builder = builder.title(report.title.clone());
    }
    Ok(builder.build())
}

fn apply_diff_options(config: AppConfig, options: &DiffOptionArgs) -> AppConfig {
    let mut builder = AppConfigBuilder::from(config);
    if options.fail_on_change {
        builder = builder.fail_on_change(true);
    }
    if let Some(include) = options.include_groups {
        builder = builder.include_groups(include);
    }
    builder.build()
}

fn run(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Commands::Diff {
            old,
            new,
            report,
            options,
        } => {
            let config =
                apply_diff_options(resolve_config(cli, report)?, options).into_validated()?;
            cli::run_diff(&config, old, new)
        }

        Commands::DiffVersions {
            old_version,
            new_version,
            metadata_dir,
            template,
            report,
            options,
        } => {
            let mut builder =
                AppConfigBuilder::from(apply_diff_options(resolve_config(cli, report)?, options));
            if metadata_dir.is_some() {
                builder = builder.metadata_dir(metadata_dir.clone());
            }
            if let Some(template) = template {
                builder = builder.template(template.as_str());
            }
            let config = builder.build().into_validated()?;
            cli::run_diff_versions(&config, old_version, new_version)
        }

        Commands::View { file, report } => {
            let config = resolve_config(cli, report)?.into_validated()?;
            cli::run_view(&config, file)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref())?;
                match &loaded_from {
                    Some(path) => eprintln!("# Loaded from: {}", path.display()),
                    None => eprintln!("# No config file found; showing defaults"),
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".config-metadata-diff.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, config::generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },

        Commands::Completions { shell } => {
            generate(
                *shell,
                &mut Cli::command(),
                "config-metadata-diff",
                &mut io::stdout(),
            );
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(&cli) {
        Ok(exit_codes::SUCCESS) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}
