/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr)
/// to provide user feedback while packages are being fetched.
pub trait ProgressReporter {
    /// Reports a progress message that replaces the previous one
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports the number of packages measured so far for the current root
    ///
    /// # Arguments
    /// * `measured` - Packages recorded so far
    /// * `current` - Package whose metadata is being fetched
    fn report_progress(&self, measured: usize, current: &str);

    /// Reports an error or warning message
    ///
    /// # Arguments
    /// * `message` - The error/warning message
    fn report_error(&self, message: &str);

    /// Clears transient progress output once all packages are done
    fn report_completion(&self);
}
