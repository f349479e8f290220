/// ProgressReporter port for status and progress during a command
///
/// Replaces the editor's notification area and status bar: messages go to
/// stderr so they never mix with the report on stdout.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports progress through a list of dependencies
    ///
    /// # Arguments
    /// * `current` - Items finished so far
    /// * `total` - Total expected items
    /// * `message` - Optional message (e.g., the dependency being analyzed)
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
