/// Crate-wide result type. Typed failures are `AnalyzerError` values carried
/// inside `anyhow::Error` so callers can add context with `.context()`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
