/// Network adapters for external API calls
mod pypi_client;

pub use pypi_client::{PyPiPackageIndex, DEFAULT_INDEX_URL, DEFAULT_TIMEOUT_SECS};
