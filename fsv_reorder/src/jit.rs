use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value of a single compile-time constant handed to a kernel template.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(untagged)]
pub enum JitValue {
    Int(i64),
    Str(String),
}

impl JitValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            JitValue::Int(value) => Some(*value),
            JitValue::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JitValue::Int(_) => None,
            JitValue::Str(value) => Some(value),
        }
    }
}

impl std::fmt::Display for JitValue {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            JitValue::Int(value) => write!(f, "{value}"),
            JitValue::Str(value) => f.write_str(value),
        }
    }
}

/// Saturates at `i64::MAX`; tensor values are range-checked before they get here.
impl From<usize> for JitValue {
    fn from(value: usize) -> Self {
        JitValue::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<i64> for JitValue {
    fn from(value: i64) -> Self {
        JitValue::Int(value)
    }
}

impl From<&str> for JitValue {
    fn from(value: &str) -> Self {
        JitValue::Str(value.to_string())
    }
}

impl From<String> for JitValue {
    fn from(value: String) -> Self {
        JitValue::Str(value)
    }
}

/// Ordered set of named constants. Insertion order is kept so the rendered
/// definitions are stable between runs.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(transparent)]
pub struct JitConstants {
    constants: IndexMap<String, JitValue>,
}

impl JitConstants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a constant; a later value for the same name replaces the earlier one in place.
    pub fn add_constant(
        &mut self,
        name: impl Into<String>,
        value: impl Into<JitValue>,
    ) {
        self.constants.insert(name.into(), value.into());
    }

    pub fn merge(
        &mut self,
        other: JitConstants,
    ) {
        self.constants.extend(other.constants);
    }

    pub fn get(
        &self,
        name: &str,
    ) -> Option<&JitValue> {
        self.constants.get(name)
    }

    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.constants.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &JitValue)> {
        self.constants.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constants.keys().map(String::as_str)
    }

    /// Renders every constant as a preprocessor definition.
    pub fn to_defines(&self) -> Vec<String> {
        self.iter().map(|(name, value)| format!("#define {name} {value}")).collect()
    }
}
