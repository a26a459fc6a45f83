//! CLI output formatting: highlighted JSON and settings tables.

use colored::Colorize;
use serde_json::Value;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

/// Widest value shown in a settings table before truncation.
const MAX_VALUE_WIDTH: usize = 48;

/// Returns pretty JSON with syntax highlighting.
///
/// Keys are cyan, strings green, numbers yellow, booleans and null magenta.
#[must_use]
pub fn highlight_json(value: &Value) -> String {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    let mut out = String::with_capacity(pretty.len() * 2);
    let mut chars = pretty.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        match ch {
            '"' => {
                let mut end = start + 1;
                let mut escaped = false;
                for (idx, c) in chars.by_ref() {
                    end = idx + c.len_utf8();
                    match c {
                        '\\' if !escaped => escaped = true,
                        '"' if !escaped => break,
                        _ => escaped = false,
                    }
                }
                let literal = &pretty[start..end];
                let is_key = pretty[end..].trim_start().starts_with(':');
                if is_key {
                    out.push_str(&literal.cyan().to_string());
                } else {
                    out.push_str(&literal.green().to_string());
                }
            }
            '-' | '0'..='9' => {
                let mut end = start + 1;
                while let Some(&(idx, c)) = chars.peek() {
                    if !matches!(c, '0'..='9' | '.' | 'e' | 'E' | '+' | '-') {
                        break;
                    }
                    end = idx + 1;
                    chars.next();
                }
                out.push_str(&pretty[start..end].yellow().to_string());
            }
            't' | 'f' | 'n' => {
                let word = ["true", "false", "null"]
                    .into_iter()
                    .find(|w| pretty[start..].starts_with(w))
                    .unwrap_or("");
                for _ in 1..word.len() {
                    chars.next();
                }
                if word.is_empty() {
                    out.push(ch);
                } else {
                    out.push_str(&word.magenta().to_string());
                }
            }
            '{' | '}' | '[' | ']' => out.push_str(&ch.to_string().bold().to_string()),
            _ => out.push(ch),
        }
    }

    out
}

/// Prints JSON with syntax highlighting.
pub fn print_highlighted_json(value: &Value) {
    println!("{}", highlight_json(value));
}

/// Truncates a string to `max_chars` characters, ending with an ellipsis.
#[must_use]
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }

    let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Formats a boolean as a colored mark.
#[must_use]
pub fn format_bool(value: bool) -> String {
    if value {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

#[derive(Tabled)]
struct SettingRow {
    #[tabled(rename = "Setting")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Bool(flag) => format_bool(*flag),
        Value::String(text) => text.clone(),
        Value::Null => "-".dimmed().to_string(),
        other => truncate(&other.to_string(), MAX_VALUE_WIDTH),
    }
}

/// Renders a snapshot object as a two-column table, one row per field.
#[must_use]
pub fn settings_table(snapshot: &Value) -> String {
    let rows: Vec<SettingRow> = snapshot
        .as_object()
        .map(|fields| {
            fields
                .iter()
                .map(|(name, value)| SettingRow { name: name.clone(), value: render_value(value) })
                .collect()
        })
        .unwrap_or_default();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// One row of the `paths` table.
#[derive(Tabled)]
pub struct PathRow {
    #[tabled(rename = "Domain")]
    pub domain: String,
    #[tabled(rename = "Snapshot")]
    pub snapshot: String,
    #[tabled(rename = "Saved")]
    pub saved: String,
    #[tabled(rename = "Config")]
    pub config: String,
    #[tabled(rename = "Exported")]
    pub exported: String,
}

/// Renders the `paths` table.
#[must_use]
pub fn paths_table(rows: Vec<PathRow>) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..3)).with(Alignment::center()))
        .with(Modify::new(Columns::new(4..5)).with(Alignment::center()))
        .to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_highlight_preserves_text() {
        colored::control::set_override(false);
        let value = json!({ "windowGap": 12, "layout": "bsp", "border": true, "note": null });
        assert_eq!(highlight_json(&value), serde_json::to_string_pretty(&value).unwrap());
    }

    #[test]
    fn test_highlight_handles_escapes() {
        colored::control::set_override(false);
        let value = json!({ "key": "say \"hi\"", "neg": -0.5 });
        assert_eq!(highlight_json(&value), serde_json::to_string_pretty(&value).unwrap());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello w…");
        assert_eq!(truncate("hello 🌍 world", 8), "hello 🌍…");
    }

    #[test]
    fn test_format_bool() {
        assert!(format_bool(true).contains('✓'));
        assert!(format_bool(false).contains('✗'));
    }

    #[test]
    fn test_settings_table_lists_fields() {
        let table = settings_table(&json!({ "windowGap": 12, "layout": "bsp" }));
        assert!(table.contains("windowGap"));
        assert!(table.contains("12"));
        assert!(table.contains("bsp"));
    }
}
