use dashmap::DashMap;
use std::sync::{Arc, Mutex, PoisonError};

pub const ANALYZER_CHANNEL: &str = "Flutter Dependency Analyzer";
pub const USAGE_INSIGHTS_CHANNEL: &str = "Flutter Dependency Usage Insights";
pub const USED_DEPENDENCIES_CHANNEL: &str = "Used Dependencies";
pub const HEALTH_CHANNEL: &str = "Flutter Dependency Health";
pub const DEPENDENCIES_CHANNEL: &str = "Flutter Dependencies";

/// Named, append-only text buffer that a command writes its report into
#[derive(Debug)]
pub struct OutputChannel {
    name: String,
    buffer: Mutex<String>,
}

impl OutputChannel {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            buffer: Mutex::new(String::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clear(&self) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn append(&self, text: &str) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_str(text);
    }

    pub fn append_line(&self, line: &str) {
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        buffer.push_str(line);
        buffer.push('\n');
    }

    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Get-or-create registry of output channels keyed by name
///
/// Channels live as long as the registry; there is no teardown.
#[derive(Debug, Default)]
pub struct ChannelRegistry {
    channels: DashMap<String, Arc<OutputChannel>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the channel called `name`, creating it on first use
    pub fn channel(&self, name: &str) -> Arc<OutputChannel> {
        Arc::clone(
            self.channels
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(OutputChannel::new(name)))
                .value(),
        )
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_get_or_create_returns_same_instance() {
        let registry = ChannelRegistry::new();
        let first = registry.channel(HEALTH_CHANNEL);
        let second = registry.channel(HEALTH_CHANNEL);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
        assert_eq!(first.name(), "Flutter Dependency Health");
    }

    #[test]
    fn test_channels_are_independent() {
        let registry = ChannelRegistry::new();
        registry.channel(USAGE_INSIGHTS_CHANNEL).append_line("📦 Package: http");
        registry.channel(USED_DEPENDENCIES_CHANNEL).append("http@^1.0.0");

        assert_eq!(
            registry.channel(USAGE_INSIGHTS_CHANNEL).contents(),
            "📦 Package: http\n"
        );
        assert_eq!(
            registry.channel(USED_DEPENDENCIES_CHANNEL).contents(),
            "http@^1.0.0"
        );
    }

    #[test]
    fn test_clear_empties_channel() {
        let registry = ChannelRegistry::new();
        let channel = registry.channel(ANALYZER_CHANNEL);
        channel.append_line("stale");
        channel.clear();
        assert!(channel.contents().is_empty());
    }
}
