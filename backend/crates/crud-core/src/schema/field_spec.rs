use crate::{FieldKind, Rule};

use serde::Serialize;

/// Declarative description of one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: String,
    /// Human-readable label used in messages ("Password length must be ...")
    pub label: String,
    pub kind: FieldKind,
    pub rules: Vec<Rule>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            rules: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.rules.push(Rule::Required);
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.rules.push(Rule::MinLength(min));
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.rules.push(Rule::MaxLength(max));
        self
    }

    pub fn email(mut self) -> Self {
        self.rules.push(Rule::Email);
        self
    }

    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }

    /// Run this field's rules against a submitted value.
    ///
    /// Absent and whitespace-only values count as empty: they fail only when
    /// the field is required, and skip every other rule otherwise.
    pub fn check(&self, value: Option<&str>) -> Option<String> {
        let value = value.unwrap_or_default();

        if value.trim().is_empty() {
            return self
                .is_required()
                .then(|| format!("{} is required", self.label));
        }

        self.rules
            .iter()
            .find_map(|rule| rule.check(&self.label, value))
    }
}
