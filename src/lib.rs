//! depsize - cumulative download size of PyPI packages
//!
//! This library walks the dependency graph of a package through the PyPI JSON
//! API, records the size of the first artifact of each package's latest
//! release, and reports the total per requested package. Optional
//! dependencies (those behind an `extra` marker) are not counted.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`size_calculation`): requirement parsing, metadata extraction, the walker
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use depsize::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let use_case = CalculateSizeUseCase::new(PyPiPackageIndex::new()?, StderrProgressReporter::new());
//!
//! let request = SizeRequest::builder().package("requests").build()?;
//! let response = use_case.execute(request).await?;
//!
//! let output = TableFormatter::new().format(&response.reports, &response.metadata)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;
pub mod size_calculation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TableFormatter,
    };
    pub use crate::adapters::outbound::network::PyPiPackageIndex;
    pub use crate::application::dto::{OutputFormat, SizeRequest, SizeResponse};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::CalculateSizeUseCase;
    pub use crate::ports::outbound::{OutputPresenter, PackageIndex, ProgressReporter, SizeFormatter};
    pub use crate::shared::error::{DepsizeError, ExitCode};
    pub use crate::shared::Result;
    pub use crate::size_calculation::domain::{
        PackageMetadata, PackageName, PackageSizeReport, ReportMetadata, Requirement,
        VisitedPackages,
    };
    pub use crate::size_calculation::services::DependencyWalker;
}
