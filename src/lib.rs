//! flutter-dep-analyzer - dependency insights for Flutter projects
//!
//! This library reads a project's `pubspec.yaml`, relays the package
//! manager's outdated report, looks up pub.dev health for each dependency,
//! and finds which source files import each dependency. It follows
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_analysis`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use flutter_dep_analyzer::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create use case with injected adapters
//! let use_case = FindUsageUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemSourceProvider::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = UsageRequest::new(PathBuf::from("."), UsageMode::Unused, ScanOptions::default());
//! let response = use_case.execute(request, &CancellationFlag::new()).await?;
//!
//! // Format output
//! let output = TextFormatter::new().format_usage(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod dependency_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        ChannelRegistry, OutputChannel, StderrProgressReporter,
    };
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemSourceProvider, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter, TreeFormatter};
    pub use crate::adapters::outbound::network::PubDevClient;
    pub use crate::adapters::outbound::process::TokioCommandRunner;
    pub use crate::application::dto::{
        DependencyListResponse, HealthRequest, HealthResponse, OutdatedRequest, OutdatedResponse,
        OutputFormat, PackageManager, UsageRequest, UsageResponse,
    };
    pub use crate::application::read_models::DependencyTree;
    pub use crate::application::use_cases::{
        CheckHealthUseCase, CheckOutdatedUseCase, FindUsageUseCase, ListDependenciesUseCase,
    };
    pub use crate::dependency_analysis::domain::{
        Dependency, DependencySet, HealthRecord, MatchStrategy, Metric, PackageName, ScanOptions,
        UsageEntry, UsageMode,
    };
    pub use crate::dependency_analysis::policies::HealthScoring;
    pub use crate::dependency_analysis::services::{BatchSchedule, ImportMatcher, ManifestParser};
    pub use crate::ports::outbound::{
        CommandRunner, ManifestReader, OutputPresenter, PackageRegistry, ProgressReporter,
        ReportFormatter, SourceFileProvider,
    };
    pub use crate::shared::{CancellationFlag, Result};
}
