/// Type alias for Result with anyhow::Error as the error type.
/// Every layer propagates through this alias; domain errors are
/// `DepsizeError` values wrapped in `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
