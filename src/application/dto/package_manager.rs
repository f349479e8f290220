use crate::ports::outbound::CommandSpec;

/// Executable used for `pub` subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    #[default]
    Dart,
    Flutter,
}

impl PackageManager {
    /// `<program> pub outdated`
    pub fn outdated_command(&self) -> CommandSpec {
        CommandSpec::new(self.program(), &["pub", "outdated"])
    }

    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Dart => "dart",
            PackageManager::Flutter => "flutter",
        }
    }
}

impl std::str::FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dart" => Ok(PackageManager::Dart),
            "flutter" => Ok(PackageManager::Flutter),
            _ => Err(format!(
                "Invalid package manager: {}. Please specify 'dart' or 'flutter'",
                s
            )),
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.program())
    }
}
