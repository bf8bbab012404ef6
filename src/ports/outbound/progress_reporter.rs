/// ProgressReporter port for reporting progress during a run
///
/// Progress goes to a side channel (stderr in the CLI) so that stdout stays
/// reserved for the JSON report.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress with a position
    ///
    /// # Arguments
    /// * `current` - Number of finished uploads
    /// * `total` - Number of uploads in the run
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
