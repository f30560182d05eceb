pub mod package_metadata;
pub mod package_name;
pub mod report_metadata;
pub mod requirement;
pub mod size_report;
pub mod visited;

pub use package_metadata::PackageMetadata;
pub use package_name::PackageName;
pub use report_metadata::ReportMetadata;
pub use requirement::Requirement;
pub use size_report::{PackageSize, PackageSizeReport, BYTES_PER_MIB};
pub use visited::VisitedPackages;
