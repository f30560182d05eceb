use super::{format_mib, HEADERS};
use crate::ports::outbound::SizeFormatter;
use crate::shared::Result;
use crate::size_calculation::domain::{PackageSizeReport, ReportMetadata};

/// Extra width every column gets beyond its header
const MIN_PADDING: usize = 2;

/// Gap between columns
const COLUMN_SEPARATOR: &str = "  ";

/// TableFormatter adapter for the default plain-text report
///
/// Renders a simple aligned table: names left-aligned, numbers right-aligned,
/// a dashed rule under the header.
///
/// ```text
/// Name        Size (MiB)    Deps.
/// --------  ------------  -------
/// requests         0.512        4
/// ```
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        Self
    }

    fn rows(reports: &[PackageSizeReport]) -> Vec<[String; 3]> {
        reports
            .iter()
            .map(|report| {
                [
                    report.name().to_string(),
                    format_mib(report.size_mib()),
                    report.dependency_count().to_string(),
                ]
            })
            .collect()
    }

    fn column_widths(rows: &[[String; 3]]) -> [usize; 3] {
        let mut widths = HEADERS.map(|header| header.chars().count() + MIN_PADDING);
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    fn render_line(cells: [&str; 3], widths: &[usize; 3]) -> String {
        [
            format!("{:<width$}", cells[0], width = widths[0]),
            format!("{:>width$}", cells[1], width = widths[1]),
            format!("{:>width$}", cells[2], width = widths[2]),
        ]
        .join(COLUMN_SEPARATOR)
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeFormatter for TableFormatter {
    fn format(&self, reports: &[PackageSizeReport], _metadata: &ReportMetadata) -> Result<String> {
        let rows = Self::rows(reports);
        let widths = Self::column_widths(&rows);

        let mut output = String::new();
        output.push_str(&Self::render_line(HEADERS, &widths));
        output.push('\n');
        output.push_str(
            &widths
                .iter()
                .map(|width| "-".repeat(*width))
                .collect::<Vec<_>>()
                .join(COLUMN_SEPARATOR),
        );
        output.push('\n');

        for row in &rows {
            output.push_str(&Self::render_line(
                [row[0].as_str(), row[1].as_str(), row[2].as_str()],
                &widths,
            ));
            output.push('\n');
        }

        Ok(output)
    }
}
