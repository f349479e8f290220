mod batch_schedule;
mod import_matcher;
mod manifest_parser;

pub use batch_schedule::{BatchSchedule, DEFAULT_BATCH_DELAY_MS, DEFAULT_BATCH_SIZE};
pub use import_matcher::ImportMatcher;
pub use manifest_parser::ManifestParser;
