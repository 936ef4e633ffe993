//! Builds the rows of the inputs and outputs tables.
//!
//! Everything here is a pure function of the manifest: columns are chosen,
//! cells are formatted as inline code where needed, and rows are sorted by
//! entry name. Layout and padding belong to the renderer.

use std::collections::HashMap;

use crate::domain::models::{Input, Inputs, Output, Outputs, TypedEntry};

/// Placeholder shown for inputs without a default value
pub const NOT_AVAILABLE: &str = "N/A";

/// A table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Description,
    Type,
    Required,
    Default,
}

impl Column {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Description => "Description",
            Self::Type => "Type",
            Self::Required => "Required",
            Self::Default => "Default",
        }
    }

    /// Header text as printed: the uppercased label.
    pub fn header(self) -> String {
        self.label().to_uppercase()
    }
}

/// Column set plus formatted, name-ordered rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableData {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

/// Build the inputs table: Name, Description, [Type], Required, Default.
pub fn input_table(inputs: &Inputs) -> TableData {
    let typed = all_typed(inputs);

    let mut columns = vec![Column::Name, Column::Description];
    if typed {
        columns.push(Column::Type);
    }
    columns.extend([Column::Required, Column::Default]);

    let rows = sorted_entries(inputs)
        .into_iter()
        .map(|(name, input)| input_row(name, input, typed))
        .collect();

    TableData { columns, rows }
}

/// Build the outputs table: Name, Description, [Type].
pub fn output_table(outputs: &Outputs) -> TableData {
    let typed = all_typed(outputs);

    let mut columns = vec![Column::Name, Column::Description];
    if typed {
        columns.push(Column::Type);
    }

    let rows = sorted_entries(outputs)
        .into_iter()
        .map(|(name, output)| output_row(name, output, typed))
        .collect();

    TableData { columns, rows }
}

fn input_row(name: &str, input: &Input, typed: bool) -> Vec<String> {
    let default = if input.default.is_empty() {
        NOT_AVAILABLE
    } else {
        input.default.as_str()
    };

    let mut row = vec![code_span(name), input.description.clone()];
    if typed {
        row.push(type_cell(input));
    }
    row.push(code_span(input.required));
    row.push(code_span(default));
    row
}

fn output_row(name: &str, output: &Output, typed: bool) -> Vec<String> {
    let mut row = vec![code_span(name), output.description.clone()];
    if typed {
        row.push(type_cell(output));
    }
    row
}

fn type_cell(entry: &impl TypedEntry) -> String {
    entry
        .value_type()
        .map(code_span)
        .unwrap_or_default()
}

/// The type column is shown only when every entry has a type. An empty set
/// keeps the column.
fn all_typed<E: TypedEntry>(entries: &HashMap<String, E>) -> bool {
    entries.values().all(|entry| entry.value_type().is_some())
}

/// Entries ordered by name, bytewise.
fn sorted_entries<E>(entries: &HashMap<String, E>) -> Vec<(&str, &E)> {
    let mut sorted: Vec<(&str, &E)> = entries
        .iter()
        .map(|(name, entry)| (name.as_str(), entry))
        .collect();
    sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
    sorted
}

/// Wrap a value in a Markdown inline code span.
pub fn code_span(value: impl std::fmt::Display) -> String {
    format!("`{value}`")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ValueType;

    fn sample_inputs(value_type: Option<ValueType>) -> Inputs {
        let mut inputs = Inputs::new();
        inputs.insert(
            "repo".to_string(),
            Input {
                description: "The owner and repository name.".to_string(),
                value_type,
                required: false,
                default: "${{ github.repository }}".to_string(),
            },
        );
        inputs.insert(
            "github_token".to_string(),
            Input {
                description: "A GitHub token.".to_string(),
                value_type,
                required: true,
                default: String::new(),
            },
        );
        inputs
    }

    #[test]
    fn test_input_table_without_types() {
        let table = input_table(&sample_inputs(None));

        assert_eq!(
            table.columns,
            [Column::Name, Column::Description, Column::Required, Column::Default]
        );
        assert_eq!(
            table.rows,
            [
                ["`github_token`", "A GitHub token.", "`true`", "`N/A`"],
                [
                    "`repo`",
                    "The owner and repository name.",
                    "`false`",
                    "`${{ github.repository }}`"
                ],
            ]
        );
    }

    #[test]
    fn test_input_table_with_types() {
        let table = input_table(&sample_inputs(Some(ValueType::String)));

        assert_eq!(
            table.columns,
            [
                Column::Name,
                Column::Description,
                Column::Type,
                Column::Required,
                Column::Default
            ]
        );
        assert_eq!(table.rows[0][2], "`string`");
        assert_eq!(table.rows[1][2], "`string`");
    }

    #[test]
    fn test_one_untyped_entry_drops_type_column() {
        let mut inputs = sample_inputs(Some(ValueType::Bool));
        inputs.get_mut("repo").unwrap().value_type = None;

        let table = input_table(&inputs);
        assert!(!table.columns.contains(&Column::Type));
        assert!(table.rows.iter().all(|row| row.len() == 4));
    }

    #[test]
    fn test_output_table_sorted_by_name() {
        let mut outputs = Outputs::new();
        outputs.insert(
            "result".to_string(),
            Output {
                description: "The result of the action.".to_string(),
                value_type: None,
            },
        );
        outputs.insert(
            "note".to_string(),
            Output {
                description: "The note about the action.".to_string(),
                value_type: None,
            },
        );

        let table = output_table(&outputs);
        assert_eq!(table.columns, [Column::Name, Column::Description]);
        assert_eq!(table.rows[0][0], "`note`");
        assert_eq!(table.rows[1][0], "`result`");
    }

    #[test]
    fn test_sort_uses_raw_names() {
        let mut outputs = Outputs::new();
        outputs.insert("a_b".to_string(), Output::default());
        outputs.insert("a".to_string(), Output::default());
        outputs.insert("B".to_string(), Output::default());

        let names: Vec<String> = output_table(&outputs)
            .rows
            .into_iter()
            .map(|row| row[0].clone())
            .collect();
        assert_eq!(names, ["`B`", "`a`", "`a_b`"]);
    }

    #[test]
    fn test_empty_sets_keep_type_column() {
        let table = output_table(&Outputs::new());
        assert_eq!(table.columns, [Column::Name, Column::Description, Column::Type]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_headers_are_uppercase() {
        assert_eq!(Column::Description.header(), "DESCRIPTION");
        assert_eq!(Column::Default.header(), "DEFAULT");
    }
}
