/// Process adapters for invoking external tools
mod command_runner;

pub use command_runner::TokioCommandRunner;
