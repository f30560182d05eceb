use crate::application::dto::{SizeRequest, SizeResponse};
use crate::ports::outbound::{PackageIndex, ProgressReporter};
use crate::shared::Result;
use crate::size_calculation::domain::{
    PackageName, PackageSizeReport, ReportMetadata, VisitedPackages,
};
use crate::size_calculation::services::DependencyWalker;
use tracing::info;

/// CalculateSizeUseCase - Core use case for dependency size reports
///
/// Runs one independent traversal per requested package, each with a fresh
/// visited map, strictly one after another. The first failure aborts the
/// whole run.
///
/// # Type Parameters
/// * `I` - PackageIndex implementation
/// * `PR` - ProgressReporter implementation
pub struct CalculateSizeUseCase<I, PR> {
    package_index: I,
    progress_reporter: PR,
}

impl<I, PR> CalculateSizeUseCase<I, PR>
where
    I: PackageIndex,
    PR: ProgressReporter,
{
    /// Creates a new CalculateSizeUseCase with injected dependencies
    pub fn new(package_index: I, progress_reporter: PR) -> Self {
        Self {
            package_index,
            progress_reporter,
        }
    }

    /// Executes the size calculation use case
    ///
    /// # Returns
    /// SizeResponse with one report per requested package, in request order
    ///
    /// # Errors
    /// Returns the first invalid package name, fetch failure or
    /// `CalculationFailed` encountered; no partial report is produced.
    pub async fn execute(&self, request: SizeRequest) -> Result<SizeResponse> {
        let result = self.measure_all(&request).await;
        if result.is_err() {
            self.progress_reporter
                .report_error("⚠️  Size calculation aborted");
        }
        self.progress_reporter.report_completion();

        Ok(SizeResponse::new(result?, ReportMetadata::now()))
    }

    async fn measure_all(&self, request: &SizeRequest) -> Result<Vec<PackageSizeReport>> {
        let walker = DependencyWalker::new(&self.package_index, &self.progress_reporter)
            .with_normalized_names(request.normalize_names);

        let mut reports = Vec::with_capacity(request.package_names.len());
        for argument in &request.package_names {
            self.progress_reporter
                .report(&format!("Calculating size of {}...", argument));

            let mut name = PackageName::from_argument(argument)?;
            if request.normalize_names {
                name = name.normalized();
            }

            let mut visited = VisitedPackages::new();
            walker.compute_size(name.as_str(), &mut visited).await?;

            let report = PackageSizeReport::from_visited(name.as_str(), &visited);
            info!(
                package = report.name(),
                bytes = report.total_bytes(),
                dependencies = report.dependency_count(),
                "measured package"
            );
            reports.push(report);
        }

        Ok(reports)
    }
}
