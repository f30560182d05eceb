use crate::size_calculation::domain::{PackageSizeReport, ReportMetadata};
use crate::shared::Result;

/// SizeFormatter port for rendering size reports
///
/// This port abstracts the rendering of the final report
/// (plain-text table, Markdown, JSON).
pub trait SizeFormatter {
    /// Renders one row per requested package
    ///
    /// # Arguments
    /// * `reports` - Size reports in command-line order
    /// * `metadata` - Generation timestamp and tool information
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, reports: &[PackageSizeReport], metadata: &ReportMetadata) -> Result<String>;
}
