use crate::size_calculation::domain::{PackageSizeReport, ReportMetadata};

/// SizeResponse - Internal response DTO from the size calculation use case
///
/// Carries one report per requested package, in request order, which
/// formatters then render.
#[derive(Debug, Clone)]
pub struct SizeResponse {
    pub reports: Vec<PackageSizeReport>,
    pub metadata: ReportMetadata,
}

impl SizeResponse {
    pub fn new(reports: Vec<PackageSizeReport>, metadata: ReportMetadata) -> Self {
        Self { reports, metadata }
    }
}
