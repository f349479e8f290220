/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;
mod source_files;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use source_files::FileSystemSourceProvider;
