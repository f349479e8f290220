use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::application::dto::{OutputFormat, PackageManager};
use crate::config::Overrides;
use crate::dependency_analysis::domain::UsageMode;

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// All messages including trace
    Trace,
}

/// Dependency insights for Flutter projects
#[derive(Parser, Debug)]
#[command(name = "flutter-dep-analyzer")]
#[command(version)]
#[command(
    about = "Find used and unused pubspec dependencies and check their pub.dev health",
    long_about = None
)]
pub struct Args {
    /// Path to the Flutter project (defaults to current directory)
    #[arg(short, long, global = true)]
    pub path: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Config file (defaults to flutter-dep-analyzer.config.yml in the project)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Diagnostic log level (overridden by RUST_LOG)
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the dependencies declared in pubspec.yaml
    List,

    /// Run `pub outdated` and show its report
    Outdated {
        /// Tool that runs `pub outdated`: dart or flutter
        #[arg(long)]
        package_manager: Option<PackageManager>,
    },

    /// Check pub.dev health of every dependency
    Health {
        /// Packages looked up together
        #[arg(long)]
        batch_size: Option<usize>,

        /// Pause between batches in milliseconds
        #[arg(long)]
        batch_delay_ms: Option<u64>,
    },

    /// Find which source files import each dependency
    Usage(UsageArgs),

    /// One used/unused line per dependency
    Summary(ScanArgs),
}

/// Source scan options shared by `usage` and `summary`
#[derive(clap::Args, Debug, Default)]
pub struct ScanArgs {
    /// Only count `package:<name>/` imports and exports
    #[arg(long)]
    pub strict: bool,

    /// Maximum number of source files scanned
    #[arg(long)]
    pub max_files: Option<usize>,

    /// Directory name to skip at any depth (repeatable, replaces the default `build`)
    #[arg(long = "exclude-dir", value_name = "DIR")]
    pub exclude_dirs: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct UsageArgs {
    /// Which dependencies to report: used, unused or both (asks when omitted)
    #[arg(long)]
    pub mode: Option<UsageMode>,

    /// Render a dependency → files tree
    #[arg(long)]
    pub tree: bool,

    /// Show only the dependency level of the tree
    #[arg(long, requires = "tree")]
    pub collapsed: bool,

    #[command(flatten)]
    pub scan: ScanArgs,

    /// Exit with code 1 when unused dependencies are found
    #[arg(long)]
    pub fail_on_unused: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Command-line values that take precedence over the config file
    pub fn overrides(&self) -> Overrides {
        let mut overrides = Overrides {
            format: self.format,
            ..Overrides::default()
        };

        match &self.command {
            Command::List => {}
            Command::Outdated { package_manager } => {
                overrides.package_manager = *package_manager;
            }
            Command::Health {
                batch_size,
                batch_delay_ms,
            } => {
                overrides.batch_size = *batch_size;
                overrides.batch_delay_ms = *batch_delay_ms;
            }
            Command::Usage(usage) => {
                overrides.usage_mode = usage.mode;
                overrides.max_files = usage.scan.max_files;
                overrides.exclude_dirs = usage.scan.exclude_dirs.clone();
            }
            Command::Summary(scan) => {
                overrides.max_files = scan.max_files;
                overrides.exclude_dirs = scan.exclude_dirs.clone();
            }
        }
        overrides
    }
}
