use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use depsize::prelude::*;

/// Mock PackageIndex serving canned metadata documents
///
/// Unknown names get the body PyPI returns for a 404, which carries no
/// `info` section.
#[derive(Default, Clone)]
pub struct MockPackageIndex {
    pub documents: HashMap<String, Value>,
    pub fetched: Arc<Mutex<Vec<String>>>,
    pub should_fail: bool,
}

impl MockPackageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a package whose latest release `1.0` has one artifact of `size` bytes
    pub fn with_package(self, name: &str, size: u64, requires_dist: &[&str]) -> Self {
        let document = json!({
            "info": {"name": name, "version": "1.0", "requires_dist": requires_dist},
            "releases": {"1.0": [{"filename": format!("{}-1.0.tar.gz", name), "size": size}]}
        });
        self.with_document(name, document)
    }

    pub fn with_document(mut self, name: &str, document: Value) -> Self {
        self.documents.insert(name.to_string(), document);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn fetched_names(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl PackageIndex for MockPackageIndex {
    async fn fetch_metadata(&self, package_name: &str) -> Result<Value> {
        self.fetched.lock().unwrap().push(package_name.to_string());

        if self.should_fail {
            return Err(DepsizeError::IndexRequestFailed {
                package: package_name.to_string(),
                details: "Mock package index failure".to_string(),
            }
            .into());
        }

        Ok(self
            .documents
            .get(package_name)
            .cloned()
            .unwrap_or_else(|| json!({"message": "Not Found"})))
    }
}
