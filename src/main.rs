use flutter_dep_analyzer::adapters::outbound::console::{
    prompt_usage_mode, ChannelRegistry, StderrProgressReporter, ANALYZER_CHANNEL,
    DEPENDENCIES_CHANNEL, HEALTH_CHANNEL, USAGE_INSIGHTS_CHANNEL, USED_DEPENDENCIES_CHANNEL,
};
use flutter_dep_analyzer::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemSourceProvider,
};
use flutter_dep_analyzer::adapters::outbound::formatters::{TextFormatter, TreeFormatter};
use flutter_dep_analyzer::adapters::outbound::network::PubDevClient;
use flutter_dep_analyzer::adapters::outbound::process::TokioCommandRunner;
use flutter_dep_analyzer::application::dto::{
    HealthRequest, OutdatedRequest, OutputFormat, UsageRequest, UsageResponse,
};
use flutter_dep_analyzer::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use flutter_dep_analyzer::application::read_models::DependencyTree;
use flutter_dep_analyzer::application::use_cases::{
    CheckHealthUseCase, CheckOutdatedUseCase, FindUsageUseCase, ListDependenciesUseCase,
};
use flutter_dep_analyzer::cli::{Args, Command, LogLevel, ScanArgs, UsageArgs};
use flutter_dep_analyzer::config::{
    discover_config, load_config_from_path, Settings, CONFIG_FILENAME,
};
use flutter_dep_analyzer::dependency_analysis::domain::UsageMode;
use flutter_dep_analyzer::dependency_analysis::services::BatchSchedule;
use flutter_dep_analyzer::ports::outbound::ReportFormatter;
use flutter_dep_analyzer::shared::error::ExitCode;
use flutter_dep_analyzer::shared::security::validate_project_root;
use flutter_dep_analyzer::shared::{CancellationFlag, Result};
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process;
use std::time::Duration;

/// Exit status after a second Ctrl-C
const INTERRUPTED_EXIT_CODE: i32 = 130;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_logging(args.log_level);

    match run(args).await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .init();
}

/// Sets the flag on the first Ctrl-C; a second one exits immediately.
fn cancel_on_ctrl_c(cancellation: CancellationFlag) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            return;
        }
        eprintln!("\n🛑 Cancelling... the current dependency will finish first.");
        cancellation.cancel();

        if tokio::signal::ctrl_c().await.is_ok() {
            process::exit(INTERRUPTED_EXIT_CODE);
        }
    });
}

async fn run(args: Args) -> Result<ExitCode> {
    let project_path = validate_project_root(args.path.as_deref().unwrap_or(Path::new(".")))?;

    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => {
            let discovered = discover_config(&project_path)?;
            if discovered.is_some() {
                eprintln!(
                    "📄 Auto-discovered config file: {}",
                    project_path.join(CONFIG_FILENAME).display()
                );
            }
            discovered
        }
    };
    let settings = Settings::resolve(args.overrides(), config.as_ref())?;
    log::debug!("Effective settings: {:?}", settings);

    let cancellation = CancellationFlag::new();
    cancel_on_ctrl_c(cancellation.clone());

    let channels = ChannelRegistry::new();
    let formatter = FormatterFactory::create(settings.format);

    let (channel_name, exit_code) = match &args.command {
        Command::List => {
            let use_case =
                ListDependenciesUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
            let response = use_case.execute(&project_path)?;
            let report = render(formatter.as_ref(), settings.format, |f| {
                f.format_dependencies(&response)
            })?;
            channels.channel(DEPENDENCIES_CHANNEL).append(&report);
            (DEPENDENCIES_CHANNEL, ExitCode::Success)
        }
        Command::Outdated { .. } => {
            let use_case = CheckOutdatedUseCase::new(
                FileSystemReader::new(),
                TokioCommandRunner::new(),
                StderrProgressReporter::new(),
            );
            let request = OutdatedRequest::new(project_path.clone(), settings.package_manager);
            let response = use_case.execute(request).await?;
            let report =
                render(formatter.as_ref(), settings.format, |f| f.format_outdated(&response))?;
            channels.channel(ANALYZER_CHANNEL).append(&report);
            (ANALYZER_CHANNEL, ExitCode::Success)
        }
        Command::Health { .. } => {
            let schedule = BatchSchedule::new(
                settings.batch_size,
                Duration::from_millis(settings.batch_delay_ms),
            )?;
            let use_case = CheckHealthUseCase::new(
                FileSystemReader::new(),
                PubDevClient::with_base_url(&settings.registry_url)?,
                StderrProgressReporter::new(),
            );
            let request = HealthRequest::new(project_path.clone(), schedule);
            let response = use_case.execute(request, &cancellation).await?;
            let report =
                render(formatter.as_ref(), settings.format, |f| f.format_health(&response))?;
            channels.channel(HEALTH_CHANNEL).append(&report);
            (HEALTH_CHANNEL, ExitCode::Success)
        }
        Command::Usage(usage) => {
            let mode = match settings.usage_mode {
                Some(mode) => mode,
                None if io::stdin().is_terminal() => {
                    prompt_usage_mode(io::stdin().lock(), io::stderr())?
                }
                None => UsageMode::Both,
            };
            let response =
                find_usage(&project_path, mode, &settings, &usage.scan, &cancellation).await?;
            present_usage(&channels, formatter.as_ref(), settings.format, usage, &response)?;
            let exit_code = if usage.fail_on_unused && response.unused_count() > 0 {
                ExitCode::UnusedDependenciesFound
            } else {
                ExitCode::Success
            };
            (USAGE_INSIGHTS_CHANNEL, exit_code)
        }
        Command::Summary(scan) => {
            let response =
                find_usage(&project_path, UsageMode::Both, &settings, scan, &cancellation).await?;
            let report =
                render(formatter.as_ref(), settings.format, |f| f.format_summary(&response))?;
            channels.channel(USED_DEPENDENCIES_CHANNEL).append(&report);
            (USED_DEPENDENCIES_CHANNEL, ExitCode::Success)
        }
    };

    let presenter = PresenterFactory::create(PresenterType::from(args.output.clone()));
    presenter.present(&channels.channel(channel_name).contents())?;

    Ok(exit_code)
}

fn render(
    formatter: &dyn ReportFormatter,
    format: OutputFormat,
    format_report: impl FnOnce(&dyn ReportFormatter) -> Result<String>,
) -> Result<String> {
    eprintln!("{}", FormatterFactory::progress_message(format));
    format_report(formatter)
}

async fn find_usage(
    project_path: &Path,
    mode: UsageMode,
    settings: &Settings,
    scan: &ScanArgs,
    cancellation: &CancellationFlag,
) -> Result<UsageResponse> {
    let use_case = FindUsageUseCase::new(
        FileSystemReader::new(),
        FileSystemSourceProvider::new(),
        StderrProgressReporter::new(),
    );
    let request = UsageRequest::new(
        project_path.to_path_buf(),
        mode,
        settings.scan_options(scan.strict),
    );
    use_case.execute(request, cancellation).await
}

/// Writes the usage report, as a tree when asked for in text format
fn present_usage(
    channels: &ChannelRegistry,
    formatter: &dyn ReportFormatter,
    format: OutputFormat,
    usage: &UsageArgs,
    response: &UsageResponse,
) -> Result<()> {
    let channel = channels.channel(USAGE_INSIGHTS_CHANNEL);

    if !usage.tree || format == OutputFormat::Json {
        if usage.tree {
            log::warn!("--tree only applies to text output; writing the JSON report");
        }
        let report = render(formatter, format, |f| f.format_usage(response))?;
        channel.append(&report);
        return Ok(());
    }

    eprintln!("{}", FormatterFactory::progress_message(format));
    let collapsed = usage.collapsed;
    let snapshot = response.clone();
    let mut tree = DependencyTree::new();
    tree.subscribe(move |tree| {
        let report = TextFormatter::tree_report(&snapshot, TreeFormatter::render(tree, collapsed));
        channel.clear();
        channel.append(&report);
    });
    tree.set_usage(response);
    Ok(())
}
