/// Formatter adapters for the different report output formats
mod json_formatter;
mod markdown_formatter;
mod table_formatter;

pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
pub use table_formatter::TableFormatter;

/// Column headers shared by the table and Markdown renderings
const HEADERS: [&str; 3] = ["Name", "Size (MiB)", "Deps."];

/// Formats a MiB value with three decimals and comma thousands separators (`1,234.567`)
fn format_mib(value: f64) -> String {
    let fixed = format!("{:.3}", value);
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "000"));

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    format!("{}.{}", grouped, fraction)
}
