use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;

/// PackageIndex port for fetching package metadata documents
///
/// This port abstracts the remote package index (e.g., the PyPI JSON API).
/// The document is returned undecoded so that the domain can attach it to a
/// `CalculationFailed` error when it has an unexpected shape.
#[async_trait]
pub trait PackageIndex: Send + Sync {
    /// Fetches the metadata document for the latest release of a package
    ///
    /// # Arguments
    /// * `package_name` - Name of the package, used exactly as given
    ///
    /// # Returns
    /// The parsed JSON body, expected to look like
    /// `{"info": {"version", "requires_dist"}, "releases": {<version>: [{"size"}]}}`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The index answers with a non-success status code
    /// - The body is not valid JSON
    async fn fetch_metadata(&self, package_name: &str) -> Result<Value>;
}
