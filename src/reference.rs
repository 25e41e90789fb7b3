//! Independent instance count used to cross-check the flattener.
//!
//! Mirrors the jq query
//! `[.resources[] | select(.mode == "managed") | select(.type != "null_resource" and .type != "terraform_data") | .instances[]] | length`
//! and works on the raw JSON rather than on parsed records.
//!
//! The excluded types only apply here. The flattener keeps them, so a state that
//! contains them reports a discrepancy in debug mode.

use serde_json::Value;

pub const REFERENCE_EXCLUDED_TYPES: &[&str] = &["terraform_data", "null_resource"];

pub fn reference_instance_count(state: &Value) -> usize {
    let Some(resources) = state.get("resources").and_then(Value::as_array) else {
        return 0;
    };

    resources
        .iter()
        .filter(|resource| resource.get("mode").and_then(Value::as_str) == Some("managed"))
        .filter(|resource| {
            !resource
                .get("type")
                .and_then(Value::as_str)
                .is_some_and(|ty| REFERENCE_EXCLUDED_TYPES.contains(&ty))
        })
        .map(|resource| {
            resource
                .get("instances")
                .and_then(Value::as_array)
                .map_or(0, Vec::len)
        })
        .sum()
}

/// Flattener count next to the reference count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountCheck {
    pub flattened: usize,
    pub reference: usize,
}

impl CountCheck {
    pub fn is_consistent(&self) -> bool {
        self.flattened == self.reference
    }

    /// Flattened count minus reference count.
    pub fn difference(&self) -> i64 {
        self.flattened as i64 - self.reference as i64
    }
}
