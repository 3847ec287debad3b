//! Output rendering: tables or JSON, chosen once by the global flags.

pub mod format;

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use comfy_table::presets::{ASCII_FULL_CONDENSED, NOTHING};
use comfy_table::{ColumnConstraint, Row, Table, Width};
use serde::Serialize;

/// Column budget for email addresses in tables.
pub const EMAIL_WIDTH: u16 = 35;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// A table column: header text and an optional width cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub max_width: Option<u16>,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            max_width: None,
        }
    }

    /// Email addresses are cut to [`EMAIL_WIDTH`] and end in `...`.
    pub const fn email(header: &'static str) -> Self {
        Self {
            header,
            max_width: Some(EMAIL_WIDTH),
        }
    }

    fn constraint(self) -> ColumnConstraint {
        match self.max_width {
            Some(width) => ColumnConstraint::UpperBoundary(Width::Fixed(width)),
            None => ColumnConstraint::ContentWidth,
        }
    }
}

/// Rendering choices shared by every command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub format: OutputFormat,
    /// Single-line JSON, or borderless tables.
    pub compact: bool,
    pub no_headers: bool,
}

impl DisplayOptions {
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    fn table(&self, columns: &[Column]) -> Table {
        let mut table = Table::new();
        table.load_preset(if self.compact {
            NOTHING
        } else {
            ASCII_FULL_CONDENSED
        });
        if !self.no_headers {
            table.set_header(columns.iter().map(|c| c.header));
        }
        table
    }

    /// A list: JSON array, or a table with a total footer.
    pub fn list<T, F>(
        &self,
        out: &mut dyn Write,
        items: &[T],
        noun: &str,
        columns: &[Column],
        row: F,
    ) -> Result<()>
    where
        T: Serialize,
        F: Fn(&T) -> Vec<String>,
    {
        if self.is_json() {
            return self.json(out, items);
        }

        if items.is_empty() {
            writeln!(out, "No {noun} found.")?;
            return Ok(());
        }

        let mut table = self.table(columns);
        for item in items {
            let mut cells = row(item);
            cells.resize(columns.len(), String::new());
            let mut line = Row::from(cells);
            // capped cells are cut, never wrapped
            line.max_height(1);
            table.add_row(line);
        }
        // columns exist only once a header or row is in
        table.set_constraints(columns.iter().map(|c| c.constraint()));
        writeln!(out, "{}", table.trim_fmt())?;
        writeln!(out, "\nTotal: {} {noun}", table.row_count())?;
        Ok(())
    }

    /// A single record: JSON object, or `Label: value` lines.
    pub fn record<T: Serialize + ?Sized>(
        &self,
        out: &mut dyn Write,
        value: &T,
        fields: &[(&str, String)],
    ) -> Result<()> {
        if self.is_json() {
            return self.json(out, value);
        }
        for (label, text) in fields {
            writeln!(out, "{label}: {text}")?;
        }
        Ok(())
    }

    /// Outcome of an action: `json` in JSON mode, `message` otherwise.
    pub fn status(&self, out: &mut dyn Write, json: &serde_json::Value, message: &str) -> Result<()> {
        if self.is_json() {
            return self.json(out, json);
        }
        writeln!(out, "{message}")?;
        Ok(())
    }

    pub fn json<T: Serialize + ?Sized>(&self, out: &mut dyn Write, value: &T) -> Result<()> {
        if self.compact {
            serde_json::to_writer(&mut *out, value)?;
        } else {
            serde_json::to_writer_pretty(&mut *out, value)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Serialize)]
    struct Widget {
        id: u64,
        name: &'static str,
    }

    const COLUMNS: &[Column] = &[Column::new("ID"), Column::new("Name")];

    fn rows() -> Vec<Widget> {
        vec![Widget { id: 1, name: "a" }, Widget { id: 2, name: "b" }]
    }

    fn capture(f: impl FnOnce(&mut dyn Write) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn to_row(r: &Widget) -> Vec<String> {
        vec![r.id.to_string(), r.name.to_string()]
    }

    /// Table lines, without the total footer.
    fn table_lines(text: &str) -> Vec<&str> {
        text.lines().take_while(|l| !l.is_empty()).collect()
    }

    #[test]
    fn list_table_has_borders_and_total_footer() {
        let opts = DisplayOptions::default();
        let text = capture(|out| opts.list(out, &rows(), "widgets", COLUMNS, to_row));
        let lines = table_lines(&text);

        assert!(lines[0].starts_with('+'), "no top border:\n{text}");
        assert!(lines[1].contains("| ID") && lines[1].contains("Name"));
        assert!(lines.iter().any(|l| l.contains("| 2 ") && l.contains("| b ")));
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width), "misaligned:\n{text}");
        assert!(text.ends_with("\nTotal: 2 widgets\n"));
    }

    #[test]
    fn compact_table_drops_borders() {
        let opts = DisplayOptions {
            compact: true,
            ..DisplayOptions::default()
        };
        let text = capture(|out| opts.list(out, &rows(), "widgets", COLUMNS, to_row));
        let lines = table_lines(&text);

        assert_eq!(lines.len(), 3, "header plus two rows:\n{text}");
        assert!(!text.contains('|') && !text.contains('+'));
        assert!(lines[0].contains("ID") && lines[0].contains("Name"));
        assert!(lines.iter().all(|l| !l.ends_with(' ')));
    }

    #[test]
    fn no_headers_skips_header_row() {
        let opts = DisplayOptions {
            compact: true,
            no_headers: true,
            ..DisplayOptions::default()
        };
        let text = capture(|out| opts.list(out, &rows(), "widgets", COLUMNS, to_row));
        let lines = table_lines(&text);

        assert_eq!(lines.len(), 2);
        assert!(!text.contains("Name"));
        assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), ["1", "a"]);
    }

    #[test]
    fn email_columns_are_cut_not_wrapped() {
        #[derive(Serialize)]
        struct Entry {
            email: &'static str,
        }
        let long = "a.very.long.alias.name.for.testing@simplelogin.example";
        let opts = DisplayOptions {
            compact: true,
            no_headers: true,
            ..DisplayOptions::default()
        };
        let text = capture(|out| {
            opts.list(out, &[Entry { email: long }], "aliases", &[Column::email("Email")], |e| {
                vec![e.email.to_string()]
            })
        });
        let lines = table_lines(&text);

        assert_eq!(lines.len(), 1, "cell wrapped:\n{text}");
        assert!(!lines[0].contains(long));
        assert!(lines[0].trim().ends_with("..."));
        assert!(lines[0].trim().chars().count() <= usize::from(EMAIL_WIDTH));
    }

    #[test]
    fn short_rows_are_padded() {
        let opts = DisplayOptions {
            compact: true,
            ..DisplayOptions::default()
        };
        let columns = [Column::new("A"), Column::new("B"), Column::new("C")];
        let text = capture(|out| {
            opts.list(out, &rows()[..1], "widgets", &columns, |_| vec!["x".to_string()])
        });
        assert!(text.ends_with("\nTotal: 1 widgets\n"));
        assert_eq!(table_lines(&text)[1].trim(), "x");
    }

    #[test]
    fn empty_list_message() {
        let opts = DisplayOptions::default();
        let text = capture(|out| opts.list(out, &Vec::<Widget>::new(), "widgets", COLUMNS, to_row));
        assert_eq!(text, "No widgets found.\n");
    }

    #[test]
    fn empty_list_json_is_array() {
        let opts = DisplayOptions {
            format: OutputFormat::Json,
            compact: true,
            ..DisplayOptions::default()
        };
        let text = capture(|out| opts.list(out, &Vec::<Widget>::new(), "widgets", COLUMNS, to_row));
        assert_eq!(text, "[]\n");
    }

    #[test]
    fn compact_json_is_single_line() {
        let opts = DisplayOptions {
            format: OutputFormat::Json,
            compact: true,
            ..DisplayOptions::default()
        };
        let text = capture(|out| opts.list(out, &rows(), "widgets", &[], to_row));
        assert_eq!(text, "[{\"id\":1,\"name\":\"a\"},{\"id\":2,\"name\":\"b\"}]\n");
    }

    #[test]
    fn pretty_json_is_indented() {
        let opts = DisplayOptions {
            format: OutputFormat::Json,
            ..DisplayOptions::default()
        };
        let text = capture(|out| opts.json(out, &json!({"deleted": true})));
        assert_eq!(text, "{\n  \"deleted\": true\n}\n");
    }

    #[test]
    fn record_lines() {
        let opts = DisplayOptions::default();
        let text = capture(|out| {
            opts.record(
                out,
                &json!({}),
                &[("Nb Alias", "3".to_string()), ("Nb Block", "0".to_string())],
            )
        });
        assert_eq!(text, "Nb Alias: 3\nNb Block: 0\n");
    }
}
