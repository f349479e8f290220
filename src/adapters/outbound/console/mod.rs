/// Console adapters for terminal interaction
mod mode_prompt;
mod output_channels;
mod progress_reporter;

pub use mode_prompt::prompt_usage_mode;
pub use output_channels::{
    ChannelRegistry, OutputChannel, ANALYZER_CHANNEL, DEPENDENCIES_CHANNEL, HEALTH_CHANNEL,
    USAGE_INSIGHTS_CHANNEL, USED_DEPENDENCIES_CHANNEL,
};
pub use progress_reporter::StderrProgressReporter;
