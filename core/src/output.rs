//! Output formatting for option tables and the formatter list.

use serde::Serialize;

use crate::formatter::{Formatter, VALID_FORMATTERS};
use crate::table::{OptionTable, OptionValue};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

/// One accepted formatter value and the style it selects.
#[derive(Debug, Clone, Serialize)]
pub struct FormatterEntry {
    pub value: &'static str,
    pub kind: Formatter,
}

/// Lists every accepted formatter value, short codes first.
pub fn formatter_entries() -> Vec<FormatterEntry> {
    VALID_FORMATTERS
        .into_iter()
        .filter_map(|value| Formatter::from_value(value).map(|kind| FormatterEntry { value, kind }))
        .collect()
}

/// Formats an option table in the requested output format.
pub fn format_options(table: &OptionTable, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(table)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(table).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Table => Ok(options_to_table(table)),
    }
}

/// Formats the accepted formatter values in the requested output format.
pub fn format_formatters(format: OutputFormat) -> Result<String, String> {
    let entries = formatter_entries();
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&entries)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(&entries).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Table => {
            let rows: Vec<(String, String)> = entries
                .iter()
                .map(|entry| (entry.value.to_string(), entry.kind.to_string()))
                .collect();
            Ok(render_table(("VALUE", "FORMATTER"), &rows))
        }
    }
}

fn options_to_table(table: &OptionTable) -> String {
    let rows: Vec<(String, String)> = table
        .entries()
        .into_iter()
        .map(|(key, value)| {
            let shown = match value {
                OptionValue::Bool(flag) => flag.to_string(),
                OptionValue::Str(text) if text.is_empty() => "-".to_string(),
                OptionValue::Str(text) => text,
            };
            (key.to_string(), shown)
        })
        .collect();
    render_table(("OPTION", "VALUE"), &rows)
}

fn render_table(header: (&str, &str), rows: &[(String, String)]) -> String {
    let width = rows
        .iter()
        .map(|(left, _)| left.len())
        .chain(std::iter::once(header.0.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{:<width$}  {}\n", header.0, header.1));
    out.push_str(&format!("{}  {}\n", "-".repeat(width), "-".repeat(header.1.len())));
    for (left, right) in rows {
        out.push_str(&format!("{left:<width$}  {right}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_arguments;

    #[test]
    fn test_formatter_entries_cover_valid_values() {
        let entries = formatter_entries();
        assert_eq!(entries.len(), VALID_FORMATTERS.len());
        assert_eq!(entries[0].value, "p");
        assert_eq!(entries[0].kind, Formatter::Progress);
    }

    #[test]
    fn test_json_output_is_flat_map() {
        let table = parse_arguments(["-c", "--fail-fast"]).unwrap();
        let json = format_options(&table, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["colour"], true);
        assert_eq!(value["fail-fast"], true);
        assert_eq!(value["f"], "p");
    }

    #[test]
    fn test_yaml_output() {
        let table = parse_arguments(["-fh"]).unwrap();
        let yaml = format_options(&table, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("formatter: h"));
        assert!(yaml.contains("help: false"));
    }

    #[test]
    fn test_table_output_aligns_columns() {
        let table = parse_arguments(["spec.php", "-b"]).unwrap();
        let text = format_options(&table, OutputFormat::Table).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "OPTION     VALUE");
        assert!(lines.contains(&"backtrace  true"));
        assert!(lines.contains(&"specFile   spec.php"));
    }

    #[test]
    fn test_formatters_table() {
        let text = format_formatters(OutputFormat::Table).unwrap();
        assert!(text.contains("documentation  documentation"));
        assert!(text.starts_with("VALUE"));
    }
}
