/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod size_request;
mod size_response;

pub use output_format::OutputFormat;
pub use size_request::{SizeRequest, SizeRequestBuilder};
pub use size_response::SizeResponse;
