use crate::shared::Result;

/// OutputPresenter port for delivering a finished report
///
/// This port abstracts the destination (stdout, file) of a command's
/// output channel once the report is complete.
pub trait OutputPresenter {
    /// Presents the report content
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
