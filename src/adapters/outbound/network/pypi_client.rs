use crate::ports::outbound::PackageIndex;
use crate::shared::error::DepsizeError;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Public PyPI
pub const DEFAULT_INDEX_URL: &str = "https://pypi.org";

/// Request timeout used when neither the config file nor the CLI sets one
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// PyPiPackageIndex adapter for fetching package metadata from the PyPI JSON API
///
/// This adapter implements the PackageIndex port. Requests go to
/// `{index_url}/pypi/{name}/json` and are never retried.
pub struct PyPiPackageIndex {
    client: reqwest::Client,
    index_url: String,
}

impl PyPiPackageIndex {
    /// Creates a client for public PyPI with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_options(DEFAULT_INDEX_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a client for any index exposing the PyPI JSON API
    pub fn with_options(index_url: &str, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("depsize/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            index_url: index_url.trim_end_matches('/').to_string(),
        })
    }

    /// Validates a package name before it is placed in a URL path
    fn validate_url_component(package_name: &str) -> Result<()> {
        let reason = if package_name.is_empty() {
            Some("Package name cannot be empty")
        } else if package_name.contains('/') || package_name.contains('\\') {
            Some("Security: Package name contains path separators which are not allowed")
        } else if package_name.contains("..") {
            Some("Security: Package name contains '..' which is not allowed")
        } else if package_name.contains('#')
            || package_name.contains('?')
            || package_name.contains('@')
        {
            Some("Security: Package name contains URL-unsafe characters")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DepsizeError::InvalidPackageName {
                name: package_name.to_string(),
                reason: reason.to_string(),
            }
            .into()),
            None => Ok(()),
        }
    }

    /// Builds the metadata URL for a package
    fn metadata_url(&self, package_name: &str) -> String {
        format!(
            "{}/pypi/{}/json",
            self.index_url,
            urlencoding::encode(package_name)
        )
    }
}

#[async_trait]
impl PackageIndex for PyPiPackageIndex {
    async fn fetch_metadata(&self, package_name: &str) -> Result<Value> {
        Self::validate_url_component(package_name)?;

        let url = self.metadata_url(package_name);
        debug!(%url, "fetching package metadata");

        let request_failed = |e: reqwest::Error| DepsizeError::IndexRequestFailed {
            package: package_name.to_string(),
            details: e.to_string(),
        };

        let response = self.client.get(&url).send().await.map_err(request_failed)?;
        let status = response.status();
        let body = response.bytes().await.map_err(request_failed)?;

        // Error documents such as PyPI's 404 `{"message": "Not Found"}` are
        // returned as-is; metadata extraction reports them with their content.
        match serde_json::from_slice::<Value>(&body) {
            Ok(document) => {
                if !status.is_success() {
                    debug!(
                        package = package_name,
                        %status,
                        "index answered with an error document"
                    );
                }
                Ok(document)
            }
            Err(_) if !status.is_success() => Err(DepsizeError::IndexResponseError {
                package: package_name.to_string(),
                status: status.as_u16(),
            }
            .into()),
            Err(e) => Err(DepsizeError::IndexRequestFailed {
                package: package_name.to_string(),
                details: format!("Response is not valid JSON: {}", e),
            }
            .into()),
        }
    }
}
