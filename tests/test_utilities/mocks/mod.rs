/// Mock implementations for testing
mod mock_package_index;
mod mock_progress_reporter;

pub use mock_package_index::MockPackageIndex;
pub use mock_progress_reporter::MockProgressReporter;
