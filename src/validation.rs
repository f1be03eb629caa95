//! Declarative field validation for form input.
//!
//! A [`FormRules`] table maps field names to a [`FieldRule`]. Fields in the
//! submitted [`FormValues`] that have no rule are never checked.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single submitted field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// True when the value's string form is empty after trimming.
    ///
    /// Numbers always render to at least one character, so `0` is not blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) => false,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Constraints for one field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldRule {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl FieldRule {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Checks one value against this rule, appending any violations
    fn check_into(&self, field: &str, value: &FieldValue, out: &mut Vec<Violation>) {
        if self.required && value.is_blank() {
            out.push(Violation::new(field, ViolationKind::Required));
        }

        // Bounds only apply to numbers; NaN fails both comparisons
        if let Some(n) = value.as_number() {
            if let Some(min) = self.min {
                if n.is_nan() || n < min {
                    out.push(Violation::new(field, ViolationKind::BelowMin { min }));
                }
            }
            if let Some(max) = self.max {
                if n.is_nan() || n > max {
                    out.push(Violation::new(field, ViolationKind::AboveMax { max }));
                }
            }
        }
    }
}

/// Submitted field values, in submission order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    entries: Vec<(String, FieldValue)>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Sets a field, replacing an earlier value in place
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        let field = field.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// Rules keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRules(BTreeMap<String, FieldRule>);

impl FormRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, rule: FieldRule) -> Self {
        self.0.insert(field.into(), rule);
        self
    }

    pub fn get(&self, field: &str) -> Option<&FieldRule> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    Required,
    BelowMin { min: f64 },
    AboveMax { max: f64 },
    NotWholeNumber,
}

/// A failed constraint on a single field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub field: String,
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl Violation {
    fn new(field: &str, kind: ViolationKind) -> Self {
        Self {
            field: field.to_string(),
            kind,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::Required => write!(f, "{} is required", self.field),
            ViolationKind::BelowMin { min } => write!(f, "{} must be at least {}", self.field, min),
            ViolationKind::AboveMax { max } => write!(f, "{} must be at most {}", self.field, max),
            ViolationKind::NotWholeNumber => write!(f, "{} must be a whole number", self.field),
        }
    }
}

/// Returns every violation of `rules` by `values`, in field order
pub fn check(values: &FormValues, rules: &FormRules) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (field, value) in values.iter() {
        if let Some(rule) = rules.get(field) {
            rule.check_into(field, value, &mut violations);
        }
    }
    violations
}

/// Returns `true` when every ruled field passes its constraints
pub fn validate(values: &FormValues, rules: &FormRules) -> bool {
    check(values, rules).is_empty()
}
