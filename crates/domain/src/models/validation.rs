//! Field-level validation issues.
//!
//! `validator` reports errors in a map keyed by field name. Submissions need
//! every message back at once and in a stable order, so the map is flattened
//! following the field order each request type declares.

use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

/// One violated intake rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Field name as it appears on the wire (camelCase).
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Flattens validation errors into issues ordered by `fields`.
///
/// `fields` lists `(struct_field, wire_field)` pairs in declaration order.
/// Errors for fields missing from the list are appended last.
pub fn ordered_issues(errors: &ValidationErrors, fields: &[(&str, &str)]) -> Vec<ValidationIssue> {
    let mut keyed: Vec<(usize, ValidationIssue)> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            let name = field.to_string();
            let (rank, wire) = fields
                .iter()
                .position(|(rust, wire)| *rust == name || *wire == name)
                .map(|idx| (idx, fields[idx].1.to_string()))
                .unwrap_or((fields.len(), name));

            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                (rank, ValidationIssue::new(wire.clone(), message))
            })
        })
        .collect();

    // Stable: keeps rule order within a field.
    keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.field.cmp(&b.1.field)));
    keyed.into_iter().map(|(_, issue)| issue).collect()
}
