/// Size calculation domain - pure model of a dependency size traversal
///
/// The domain layer knows nothing about HTTP or the console. The walker
/// service reaches the package index only through the `PackageIndex` port.
pub mod domain;
pub mod services;
