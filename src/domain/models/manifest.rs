//! Action manifest model.
//!
//! A manifest holds two independent, name-keyed sets: inputs and outputs.
//! Deserialization is lenient in the same places `action.yml` files are in
//! practice: null sections and entries are treated as empty, `default` takes
//! any scalar, and `required` accepts quoted booleans.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Name-keyed set of manifest inputs.
pub type Inputs = HashMap<String, Input>;

/// Name-keyed set of manifest outputs.
pub type Outputs = HashMap<String, Output>;

/// The value type annotation shown in the rendered `TYPE` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Number,
    Bool,
}

impl ValueType {
    /// Every selectable type, in prompt order.
    pub const ALL: [Self; 3] = [Self::String, Self::Number, Self::Bool];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "bool",
        }
    }

    /// Option labels for a single-choice prompt.
    pub fn options() -> [&'static str; 3] {
        Self::ALL.map(Self::as_str)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|value_type| value_type.as_str() == s)
            .ok_or_else(|| format!("unknown type '{s}', expected one of: string, number, bool"))
    }
}

/// Which half of the manifest an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestSection {
    Inputs,
    Outputs,
}

impl ManifestSection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inputs => "inputs",
            Self::Outputs => "outputs",
        }
    }

    /// Dotted path of an entry, e.g. `inputs.github_token`.
    pub fn field_path(self, name: &str) -> String {
        format!("{}.{name}", self.as_str())
    }
}

/// An entry whose type annotation can be filled in after loading.
pub trait TypedEntry {
    fn value_type(&self) -> Option<ValueType>;

    /// Set the type of an untyped entry. Entries that already carry a type
    /// are left untouched; returns whether the assignment happened.
    fn assign_type(&mut self, value_type: ValueType) -> bool;
}

/// A single manifest input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Input {
    #[serde(default, deserialize_with = "scalar_text")]
    pub description: String,

    /// Not part of the `action.yml` schema; only used for the rendered table.
    #[serde(default, rename = "type", deserialize_with = "optional_value_type")]
    pub value_type: Option<ValueType>,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub required: bool,

    #[serde(default, deserialize_with = "scalar_text")]
    pub default: String,
}

impl TypedEntry for Input {
    fn value_type(&self) -> Option<ValueType> {
        self.value_type
    }

    fn assign_type(&mut self, value_type: ValueType) -> bool {
        if self.value_type.is_some() {
            return false;
        }
        self.value_type = Some(value_type);
        true
    }
}

/// A single manifest output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Output {
    #[serde(default, deserialize_with = "scalar_text")]
    pub description: String,

    #[serde(default, rename = "type", deserialize_with = "optional_value_type")]
    pub value_type: Option<ValueType>,
}

impl TypedEntry for Output {
    fn value_type(&self) -> Option<ValueType> {
        self.value_type
    }

    fn assign_type(&mut self, value_type: ValueType) -> bool {
        if self.value_type.is_some() {
            return false;
        }
        self.value_type = Some(value_type);
        true
    }
}

/// The loaded manifest. Keys other than `inputs` and `outputs` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(default, deserialize_with = "entries")]
    pub inputs: Inputs,

    #[serde(default, deserialize_with = "entries")]
    pub outputs: Outputs,
}

impl Manifest {
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty() && self.outputs.is_empty()
    }
}

fn entries<'de, D, T>(deserializer: D) -> Result<HashMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let raw = Option::<HashMap<String, Option<T>>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(name, entry)| (name, entry.unwrap_or_default()))
        .collect())
}

fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Sequence(_) => Err(de::Error::custom("expected a scalar, found a sequence")),
        Value::Mapping(_) => Err(de::Error::custom("expected a scalar, found a mapping")),
        Value::Tagged(tagged) => Err(de::Error::custom(format!(
            "expected a scalar, found tagged value {}",
            tagged.tag
        ))),
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(false),
        Value::Bool(flag) => Ok(flag),
        Value::String(text) => match text.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(de::Error::custom(format!(
                "invalid boolean '{other}', expected true or false"
            ))),
        },
        _ => Err(de::Error::custom("expected a boolean")),
    }
}

fn optional_value_type<'de, D>(deserializer: D) -> Result<Option<ValueType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some).map_err(de::Error::custom),
    }
}
