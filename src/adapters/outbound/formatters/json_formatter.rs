use crate::ports::outbound::SizeFormatter;
use crate::shared::Result;
use crate::size_calculation::domain::{PackageSizeReport, ReportMetadata};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SizeDocument {
    metadata: Metadata,
    packages: Vec<PackageEntry>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tool: Tool,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct PackageEntry {
    name: String,
    size_bytes: u64,
    size_mib: f64,
    dependency_count: usize,
    /// Every package counted in `size_bytes`, root first
    breakdown: Vec<BreakdownEntry>,
}

#[derive(Debug, Serialize)]
struct BreakdownEntry {
    name: String,
    size_bytes: u64,
}

/// JsonFormatter adapter for machine-readable output
///
/// Unlike the tabular formats it carries the per-package breakdown of
/// every total.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeFormatter for JsonFormatter {
    fn format(&self, reports: &[PackageSizeReport], metadata: &ReportMetadata) -> Result<String> {
        let document = SizeDocument {
            metadata: Metadata {
                timestamp: metadata.timestamp().to_string(),
                tool: Tool {
                    name: metadata.tool_name().to_string(),
                    version: metadata.tool_version().to_string(),
                },
            },
            packages: reports
                .iter()
                .map(|report| PackageEntry {
                    name: report.name().to_string(),
                    size_bytes: report.total_bytes(),
                    size_mib: report.size_mib(),
                    dependency_count: report.dependency_count(),
                    breakdown: report
                        .packages()
                        .iter()
                        .map(|package| BreakdownEntry {
                            name: package.name.clone(),
                            size_bytes: package.size_bytes,
                        })
                        .collect(),
                })
                .collect(),
        };

        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size_calculation::domain::VisitedPackages;
    use serde_json::Value;

    #[test]
    fn test_json_document_shape() {
        let mut visited = VisitedPackages::new();
        visited.insert("root".to_string(), 786_432);
        visited.insert("leaf".to_string(), 262_144);
        let reports = vec![PackageSizeReport::from_visited("root", &visited)];
        let metadata = ReportMetadata::new(
            "2024-01-01T00:00:00+00:00".to_string(),
            "depsize".to_string(),
            "0.1.0".to_string(),
        );

        let output = JsonFormatter::new().format(&reports, &metadata).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["metadata"]["tool"]["name"], "depsize");
        assert_eq!(json["metadata"]["timestamp"], "2024-01-01T00:00:00+00:00");

        let package = &json["packages"][0];
        assert_eq!(package["name"], "root");
        assert_eq!(package["size_bytes"], 1_048_576);
        assert_eq!(package["size_mib"], 1.0);
        assert_eq!(package["dependency_count"], 1);
        assert_eq!(package["breakdown"][0]["name"], "root");
        assert_eq!(package["breakdown"][1]["name"], "leaf");
        assert_eq!(package["breakdown"][1]["size_bytes"], 262_144);
    }

    #[test]
    fn test_json_empty_packages() {
        let metadata = ReportMetadata::now();
        let output = JsonFormatter::new().format(&[], &metadata).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();
        assert!(json["packages"].as_array().unwrap().is_empty());
    }
}
