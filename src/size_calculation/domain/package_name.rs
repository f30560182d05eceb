use crate::shared::error::DepsizeError;
use crate::shared::Result;
use regex::Regex;
use std::sync::LazyLock;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Runs of separators that PEP 503 folds into a single hyphen
static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_.]+").expect("separator pattern is valid"));

/// NewType wrapper for a package name given on the command line
///
/// Top-level names are lowercased before lookup. Names reached through
/// requirement strings bypass this type and are used as declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    /// Validates and lowercases a command-line argument.
    pub fn from_argument(argument: &str) -> Result<Self> {
        let name = argument.trim();

        if name.is_empty() {
            return Err(invalid(argument, "Package name cannot be empty"));
        }

        // Security: Length limit to prevent DoS
        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            return Err(invalid(
                argument,
                &format!(
                    "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                    name.len(),
                    MAX_PACKAGE_NAME_LENGTH
                ),
            ));
        }

        // Security: the name becomes a URL path segment
        if name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(invalid(argument, "Package name contains path separators"));
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(invalid(
                argument,
                "Package name contains invalid characters. Only ASCII alphanumerics, hyphens, underscores and dots are allowed.",
            ));
        }

        Ok(Self(name.to_lowercase()))
    }

    /// PEP 503 normalized form: lowercase with `-`, `_` and `.` runs folded to `-`.
    pub fn normalize(name: &str) -> String {
        SEPARATOR_RUN
            .replace_all(&name.to_lowercase(), "-")
            .into_owned()
    }

    pub fn normalized(&self) -> Self {
        Self(Self::normalize(&self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(name: &str, reason: &str) -> anyhow::Error {
    DepsizeError::InvalidPackageName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
