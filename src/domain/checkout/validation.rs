//! Structural validation results for checkout payloads.
//!
//! Violations are collected in the order fields are visited, which is the
//! declaration order of the payload types. Each violation renders as a single
//! `"<field path>: <rule> failed"` line.

use std::fmt;

use thiserror::Error;

/// A validation rule that a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Field must be present and non-empty / non-zero.
    Required,

    /// Collection must contain at least this many elements.
    Min(usize),
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => write!(f, "required"),
            Rule::Min(n) => write!(f, "min={}", n),
        }
    }
}

/// A single failing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Fully qualified JSON path (e.g. `payer.phone.number`, `items[0].title`).
    pub field: String,

    /// The rule the field failed.
    pub rule: Rule,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} failed", self.field, self.rule)
    }
}

/// Ordered collection of field violations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation for `field`.
    pub fn push(&mut self, field: impl Into<String>, rule: Rule) {
        self.violations.push(FieldViolation {
            field: field.into(),
            rule,
        });
    }

    /// Records a `required` violation when `value` is empty.
    pub fn require_text(&mut self, field: impl Into<String>, value: &str) {
        if value.is_empty() {
            self.push(field, Rule::Required);
        }
    }

    /// Records a `required` violation when `value` is zero.
    pub fn require_non_zero_int(&mut self, field: impl Into<String>, value: i64) {
        if value == 0 {
            self.push(field, Rule::Required);
        }
    }

    /// Records a `required` violation when `value` is zero.
    pub fn require_non_zero_float(&mut self, field: impl Into<String>, value: f64) {
        if value == 0.0 {
            self.push(field, Rule::Required);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Converts the collected violations into a validation outcome.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

/// Joins a parent path and a field name with `.`.
pub(crate) fn field_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", parent, field)
    }
}
