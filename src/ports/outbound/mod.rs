/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (package index, console, file system).
pub mod formatter;
pub mod output_presenter;
pub mod package_index;
pub mod progress_reporter;

pub use formatter::SizeFormatter;
pub use output_presenter::OutputPresenter;
pub use package_index::PackageIndex;
pub use progress_reporter::ProgressReporter;
