use regex::Regex;
use std::sync::LazyLock;

/// Permissive requirement pattern: a name token, a constraint token, then free-form markers.
///
/// Anchored at the start only. Every group is optional, so the pattern itself
/// matches any single-line input; a requirement without a name token counts as
/// unparseable.
static REQUIREMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^
        (?P<package>[A-Za-z0-9._-]+)?   # package name
        (?P<version>[<>~=0-9,.]+)?      # version constraints
        (?P<markers>.*)?                # anything else: extras, markers, parentheses
        ",
    )
    .expect("requirement pattern is valid")
});

/// Substring that marks a dependency as belonging to an optional feature group
const EXTRA_MARKER: &str = "extra";

/// A dependency declaration taken from `requires_dist`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    package: String,
    version: Option<String>,
    markers: String,
}

impl Requirement {
    /// Best-effort parse. Returns `None` when no package name can be found.
    pub fn parse(requirement: &str) -> Option<Self> {
        let captures = REQUIREMENT_PATTERN.captures(requirement)?;
        let package = captures.name("package")?.as_str().to_string();

        Some(Self {
            package,
            version: captures.name("version").map(|m| m.as_str().to_string()),
            markers: captures
                .name("markers")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        })
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn markers(&self) -> &str {
        &self.markers
    }

    /// True when the markers mention an extra; such dependencies are optional
    /// and never counted.
    pub fn is_extra(&self) -> bool {
        self.markers.contains(EXTRA_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_name() {
        let req = Requirement::parse("idna").unwrap();
        assert_eq!(req.package(), "idna");
        assert_eq!(req.version(), None);
        assert_eq!(req.markers(), "");
        assert!(!req.is_extra());
    }

    #[test]
    fn test_parse_name_with_constraint() {
        let req = Requirement::parse("urllib3<3,>=1.21.1").unwrap();
        assert_eq!(req.package(), "urllib3");
        assert_eq!(req.version(), Some("<3,>=1.21.1"));
        assert_eq!(req.markers(), "");
    }

    #[test]
    fn test_parse_environment_marker() {
        let req = Requirement::parse("colorama; platform_system == \"Windows\"").unwrap();
        assert_eq!(req.package(), "colorama");
        assert_eq!(req.markers(), "; platform_system == \"Windows\"");
        assert!(!req.is_extra());
    }

    #[test]
    fn test_parse_extra_marker() {
        let req = Requirement::parse("PySocks!=1.5.7,>=1.5.6; extra == \"socks\"").unwrap();
        assert_eq!(req.package(), "PySocks");
        assert!(req.is_extra());
    }

    #[test]
    fn test_parse_extra_marker_with_constraint_in_parentheses() {
        let req = Requirement::parse("pytest (>=6.0) ; extra == 'test'").unwrap();
        assert_eq!(req.package(), "pytest");
        assert_eq!(req.version(), None);
        assert!(req.is_extra());
    }

    #[test]
    fn test_parse_keeps_declared_case() {
        let req = Requirement::parse("Jinja2>=3.1.2").unwrap();
        assert_eq!(req.package(), "Jinja2");
    }

    #[test]
    fn test_parse_bracketed_extras_are_not_extra_markers() {
        let req = Requirement::parse("uvicorn[standard]>=0.12").unwrap();
        assert_eq!(req.package(), "uvicorn");
        assert_eq!(req.markers(), "[standard]>=0.12");
        assert!(!req.is_extra());
    }

    #[test]
    fn test_parse_empty_string() {
        assert!(Requirement::parse("").is_none());
    }

    #[test]
    fn test_parse_malformed_string() {
        assert!(Requirement::parse("; extra == \"x\"").is_none());
        assert!(Requirement::parse("   requests").is_none());
        assert!(Requirement::parse("@@@").is_none());
    }
}
