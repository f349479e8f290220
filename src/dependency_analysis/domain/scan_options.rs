use serde::Serialize;

/// Default upper bound on the number of source files scanned
pub const DEFAULT_MAX_FILES: usize = 5000;

/// Default directory name excluded from scanning (build output)
pub const DEFAULT_EXCLUDED_DIR: &str = "build";

/// Source file extension scanned for imports
pub const DART_EXTENSION: &str = "dart";

/// How an import is recognised in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// Dependency name anywhere inside the quoted import argument.
    /// Over-matches on substring collisions such as `http` / `http_parser`.
    #[default]
    Loose,
    /// Only `package:<name>/` URIs of `import`/`export` directives
    PackageUri,
}

/// Parameters of a source tree scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub extension: String,
    /// Directory names skipped at any depth
    pub exclude_dirs: Vec<String>,
    pub max_files: usize,
    pub strategy: MatchStrategy,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extension: DART_EXTENSION.to_string(),
            exclude_dirs: vec![DEFAULT_EXCLUDED_DIR.to_string()],
            max_files: DEFAULT_MAX_FILES,
            strategy: MatchStrategy::Loose,
        }
    }
}

impl ScanOptions {
    pub fn is_excluded_dir(&self, dir_name: &str) -> bool {
        self.exclude_dirs.iter().any(|excluded| excluded == dir_name)
    }
}
