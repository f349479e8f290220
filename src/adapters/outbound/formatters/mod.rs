/// Formatter adapters for the report output formats
mod json_formatter;
mod text_formatter;
mod tree_formatter;

pub use json_formatter::JsonFormatter;
pub use text_formatter::TextFormatter;
pub use tree_formatter::TreeFormatter;
