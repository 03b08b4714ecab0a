//! Field validation for the edit form

use crate::types::{EditDraft, Field};
use std::collections::BTreeMap;

/// Constraints on one field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rule {
    pub required: bool,
    pub min_length: Option<usize>,
}

impl Rule {
    /// Rules for each editable field. Only title and author are constrained.
    pub fn for_field(field: Field) -> Self {
        match field {
            Field::Title | Field::Author => Rule {
                required: true,
                min_length: Some(1),
            },
            _ => Rule::default(),
        }
    }

    /// Check a value against this rule.
    ///
    /// Min-length is only checked on non-empty values; emptiness is the
    /// required rule's concern.
    pub fn check(&self, value: &str) -> FieldValidation {
        let length = value.chars().count();
        FieldValidation {
            required: self.required && value.is_empty(),
            min_length: self.min_length.filter(|&min| length > 0 && length < min),
        }
    }
}

/// Violations found for one field. `min_length` holds the required length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldValidation {
    pub required: bool,
    pub min_length: Option<usize>,
}

impl FieldValidation {
    pub fn is_valid(&self) -> bool {
        !self.required && self.min_length.is_none()
    }

    /// Message for the first violation, if any
    pub fn message(&self, field: Field) -> Option<String> {
        let name = field.control_name();
        if self.required {
            Some(format!("{} is required", capitalize(name)))
        } else {
            self.min_length
                .map(|min| format!("{} must be at least {} characters", name, min))
        }
    }
}

/// Validation results for a whole draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidation {
    fields: BTreeMap<Field, FieldValidation>,
}

impl FormValidation {
    /// Validate every field of a draft
    pub fn of(draft: &EditDraft) -> Self {
        let fields = Field::ALL
            .iter()
            .map(|&field| {
                let rule = Rule::for_field(field);
                let value = draft.value(field);
                (field, rule.check(&value))
            })
            .collect();
        Self { fields }
    }

    pub fn is_valid(&self) -> bool {
        self.fields.values().all(FieldValidation::is_valid)
    }

    pub fn field(&self, field: Field) -> FieldValidation {
        self.fields.get(&field).copied().unwrap_or_default()
    }

    /// Fields currently failing validation
    pub fn invalid_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields
            .iter()
            .filter(|(_, v)| !v.is_valid())
            .map(|(field, _)| *field)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
