use super::{format_mib, HEADERS};
use crate::ports::outbound::SizeFormatter;
use crate::shared::Result;
use crate::size_calculation::domain::{PackageSizeReport, ReportMetadata};

/// Markdown table separator line, numeric columns right-aligned
const TABLE_SEPARATOR: &str = "|------|-----------:|------:|\n";

/// MarkdownFormatter adapter for rendering the report as a GitHub-flavored Markdown table
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeFormatter for MarkdownFormatter {
    fn format(&self, reports: &[PackageSizeReport], metadata: &ReportMetadata) -> Result<String> {
        let mut output = String::new();
        output.push_str("# Dependency Sizes\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {}\n\n",
            metadata.tool_name(),
            metadata.tool_version(),
            metadata.timestamp()
        ));
        output.push_str(&format!("| {} |\n", HEADERS.join(" | ")));
        output.push_str(TABLE_SEPARATOR);

        for report in reports {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(report.name()),
                format_mib(report.size_mib()),
                report.dependency_count()
            ));
        }

        Ok(output)
    }
}
