//! Markdown table output for manifest inputs and outputs
//!
//! Tables are drawn with comfy-table's Markdown preset: left and right
//! borders, a `|---|` header separator, and no top or bottom border.
//! Headers are centered in their column and body cells are left-aligned.

use std::io::{self, Write};

use comfy_table::{presets, Cell, ContentArrangement, Table};
use console::measure_text_width;

use crate::domain::models::{Inputs, Outputs};
use crate::services::{input_table, output_table, Column, TableData};

/// Default cap on the content width of a single column
pub const MAX_COLUMN_WIDTH: u16 = 256;

/// Writes Markdown tables to any `io::Write` sink
pub struct MarkdownTableWriter<W> {
    writer: W,
    max_column_width: u16,
}

impl<W: Write> MarkdownTableWriter<W> {
    pub const fn new(writer: W) -> Self {
        Self::with_max_column_width(writer, MAX_COLUMN_WIDTH)
    }

    pub const fn with_max_column_width(writer: W, max_column_width: u16) -> Self {
        Self {
            writer,
            max_column_width,
        }
    }

    /// Write the inputs table
    pub fn write_inputs(&mut self, inputs: &Inputs) -> io::Result<()> {
        self.write_table(&input_table(inputs))
    }

    /// Write the outputs table
    pub fn write_outputs(&mut self, outputs: &Outputs) -> io::Result<()> {
        self.write_table(&output_table(outputs))
    }

    /// Write an already-built table
    pub fn write_table(&mut self, table: &TableData) -> io::Result<()> {
        let rendered = render_markdown_table(table, self.max_column_width);
        self.writer.write_all(rendered.as_bytes())
    }

    /// Write the blank line that separates two tables
    pub fn write_separator(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Render `table` as Markdown, one line per table row, each ending in `\n`.
///
/// Body cells wider than `max_column_width` are word-wrapped onto several
/// lines. Headers never wrap.
pub fn render_markdown_table(table: &TableData, max_column_width: u16) -> String {
    let max_width = usize::from(max_column_width).max(1);
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| wrap_cell(cell, max_width)).collect())
        .collect();
    let widths = column_widths(&table.columns, &rows);

    let mut grid = Table::new();
    grid.load_preset(presets::ASCII_MARKDOWN)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(
            table
                .columns
                .iter()
                .zip(&widths)
                .map(|(column, width)| Cell::new(center(&column.header(), *width))),
        );

    for row in rows {
        grid.add_row(row.into_iter().map(Cell::new));
    }

    format!("{grid}\n")
}

/// Display width of each column: its widest line, header included.
fn column_widths(columns: &[Column], rows: &[Vec<String>]) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let header = measure_text_width(&column.header());
            let widest_cell = rows
                .iter()
                .filter_map(|row| row.get(index))
                .flat_map(|cell| cell.lines())
                .map(measure_text_width)
                .max()
                .unwrap_or(0);
            header.max(widest_cell)
        })
        .collect()
}

/// Greedy word wrap; words longer than `max_width` are split.
fn wrap_cell(text: &str, max_width: usize) -> String {
    let mut lines = Vec::new();
    for line in text.lines() {
        if measure_text_width(line) <= max_width {
            lines.push(line.to_string());
            continue;
        }

        let mut current = String::new();
        for piece in line.split_whitespace().flat_map(|word| split_word(word, max_width)) {
            let piece_width = measure_text_width(&piece);
            if !current.is_empty() && measure_text_width(&current) + 1 + piece_width > max_width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&piece);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines.join("\n")
}

fn split_word(word: &str, max_width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut buf = [0; 4];
    for ch in word.chars() {
        let ch_width = measure_text_width(ch.encode_utf8(&mut buf));
        if !piece.is_empty() && measure_text_width(&piece) + ch_width > max_width {
            pieces.push(std::mem::take(&mut piece));
        }
        piece.push(ch);
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// Center `text` within `width` columns; odd padding puts the extra space
/// on the right.
fn center(text: &str, width: usize) -> String {
    let remaining = width.saturating_sub(measure_text_width(text));
    let left = remaining / 2;
    let right = remaining - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Input, Output, ValueType};

    fn inputs(value_type: Option<ValueType>) -> Inputs {
        let mut inputs = Inputs::new();
        inputs.insert(
            "github_token".to_string(),
            Input {
                description: "A GitHub token.".to_string(),
                value_type,
                required: true,
                default: String::new(),
            },
        );
        inputs.insert(
            "repo".to_string(),
            Input {
                description: "The owner and repository name. e.g.) Codertocat/Hello-World."
                    .to_string(),
                value_type,
                required: false,
                default: "${{ github.repository }}".to_string(),
            },
        );
        inputs
    }

    fn outputs(value_type: Option<ValueType>) -> Outputs {
        let mut outputs = Outputs::new();
        outputs.insert(
            "result".to_string(),
            Output {
                description: "The result of the action.".to_string(),
                value_type,
            },
        );
        outputs.insert(
            "note".to_string(),
            Output {
                description: "The note about the action.".to_string(),
                value_type,
            },
        );
        outputs
    }

    fn render_inputs(inputs: &Inputs) -> String {
        let mut writer = MarkdownTableWriter::new(Vec::new());
        writer.write_inputs(inputs).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    fn render_outputs(outputs: &Outputs) -> String {
        let mut writer = MarkdownTableWriter::new(Vec::new());
        writer.write_outputs(outputs).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_inputs_without_types() {
        let expected = concat!(
            "|      NAME      |                         DESCRIPTION                          | REQUIRED |          DEFAULT           |\n",
            "|----------------|--------------------------------------------------------------|----------|----------------------------|\n",
            "| `github_token` | A GitHub token.                                              | `true`   | `N/A`                      |\n",
            "| `repo`         | The owner and repository name. e.g.) Codertocat/Hello-World. | `false`  | `${{ github.repository }}` |\n",
        );

        assert_eq!(render_inputs(&inputs(None)), expected);
    }

    #[test]
    fn test_inputs_with_types() {
        let expected = concat!(
            "|      NAME      |                         DESCRIPTION                          |   TYPE   | REQUIRED |          DEFAULT           |\n",
            "|----------------|--------------------------------------------------------------|----------|----------|----------------------------|\n",
            "| `github_token` | A GitHub token.                                              | `string` | `true`   | `N/A`                      |\n",
            "| `repo`         | The owner and repository name. e.g.) Codertocat/Hello-World. | `string` | `false`  | `${{ github.repository }}` |\n",
        );

        assert_eq!(render_inputs(&inputs(Some(ValueType::String))), expected);
    }

    #[test]
    fn test_outputs_without_types() {
        let expected = concat!(
            "|   NAME   |        DESCRIPTION         |\n",
            "|----------|----------------------------|\n",
            "| `note`   | The note about the action. |\n",
            "| `result` | The result of the action.  |\n",
        );

        assert_eq!(render_outputs(&outputs(None)), expected);
    }

    #[test]
    fn test_outputs_with_types() {
        let expected = concat!(
            "|   NAME   |        DESCRIPTION         |   TYPE   |\n",
            "|----------|----------------------------|----------|\n",
            "| `note`   | The note about the action. | `string` |\n",
            "| `result` | The result of the action.  | `string` |\n",
        );

        assert_eq!(render_outputs(&outputs(Some(ValueType::String))), expected);
    }

    #[test]
    fn test_empty_outputs_render_header_only() {
        let rendered = render_outputs(&Outputs::new());
        assert!(rendered.starts_with("| NAME | DESCRIPTION | TYPE |\n"));
        assert!(!rendered.contains('`'));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let inputs = inputs(None);
        assert_eq!(render_inputs(&inputs), render_inputs(&inputs));
    }

    #[test]
    fn test_separator_is_blank_line() {
        let mut writer = MarkdownTableWriter::new(Vec::new());
        writer.write_separator().unwrap();
        assert_eq!(writer.into_inner(), b"\n");
    }

    #[test]
    fn test_center_puts_extra_space_right() {
        assert_eq!(center("NAME", 8), "  NAME  ");
        assert_eq!(center("NAME", 9), "  NAME   ");
        assert_eq!(center("DESCRIPTION", 4), "DESCRIPTION");
    }

    #[test]
    fn test_column_width_is_capped() {
        let mut outputs = Outputs::new();
        outputs.insert(
            "long".to_string(),
            Output {
                description: "x".repeat(40),
                value_type: None,
            },
        );
        let table = output_table(&outputs);
        let rows: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| wrap_cell(cell, 16)).collect())
            .collect();
        assert_eq!(column_widths(&table.columns, &rows), [6, 16]);
    }

    #[test]
    fn test_wrap_cell() {
        assert_eq!(wrap_cell("short", 16), "short");
        assert_eq!(
            wrap_cell("word word word word word", 16),
            "word word word\nword word"
        );
        assert_eq!(wrap_cell(&"x".repeat(10), 4), "xxxx\nxxxx\nxx");
        assert_eq!(wrap_cell("", 16), "");
    }

    #[test]
    fn test_capped_column_keeps_header_centered() {
        let mut outputs = Outputs::new();
        outputs.insert(
            "long".to_string(),
            Output {
                description: "word ".repeat(8).trim_end().to_string(),
                value_type: None,
            },
        );

        let expected = concat!(
            "|  NAME  |  DESCRIPTION   |\n",
            "|--------|----------------|\n",
            "| `long` | word word word |\n",
            "|        | word word word |\n",
            "|        | word word      |\n",
        );

        assert_eq!(render_markdown_table(&output_table(&outputs), 16), expected);
    }
}
