use crate::shared::error::DepsizeError;
use crate::shared::Result;

/// SizeRequest - Internal request DTO for the size calculation use case
#[derive(Debug, Clone)]
pub struct SizeRequest {
    /// Package names as given on the command line, in order
    pub package_names: Vec<String>,
    /// Fold dependency names to their PEP 503 form before lookup
    pub normalize_names: bool,
}

impl SizeRequest {
    pub fn new(package_names: Vec<String>, normalize_names: bool) -> Self {
        Self {
            package_names,
            normalize_names,
        }
    }

    pub fn builder() -> SizeRequestBuilder {
        SizeRequestBuilder::default()
    }
}

/// Builder for `SizeRequest`
#[derive(Debug, Default)]
pub struct SizeRequestBuilder {
    package_names: Vec<String>,
    normalize_names: bool,
}

impl SizeRequestBuilder {
    pub fn package(mut self, name: impl Into<String>) -> Self {
        self.package_names.push(name.into());
        self
    }

    pub fn packages<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.package_names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn normalize_names(mut self, normalize_names: bool) -> Self {
        self.normalize_names = normalize_names;
        self
    }

    /// # Errors
    /// Returns a validation error when no package name was given.
    pub fn build(self) -> Result<SizeRequest> {
        if self.package_names.is_empty() {
            return Err(DepsizeError::Validation {
                message: "At least one package name is required".to_string(),
            }
            .into());
        }

        Ok(SizeRequest::new(self.package_names, self.normalize_names))
    }
}
