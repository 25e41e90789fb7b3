//! Attribute-level inspections over every record in the state, regardless of mode.

use std::collections::HashSet;

use serde_json::Value;

use crate::stats::{FrequencyEntry, frequency};
use crate::terraform::StateDocument;

pub const DEFAULT_EPHEMERAL_KEYWORDS: &[&str] = &["demo", "test", "temp", "tmp", "example"];

const UNKNOWN_NAME: &str = "Unknown";

/// Instances of a single resource type, keyed by their attribute content.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeInstances {
    pub resource_type: String,
    pub instances: Vec<Value>,
    /// `instances` with duplicate attribute objects removed, first occurrence kept.
    pub unique: Vec<Value>,
}

impl TypeInstances {
    /// Union of the top-level attribute keys across unique instances, first-seen order.
    pub fn attribute_keys(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut keys = Vec::new();
        for attributes in &self.unique {
            if let Some(fields) = attributes.as_object() {
                for key in fields.keys() {
                    if seen.insert(key.as_str()) {
                        keys.push(key.clone());
                    }
                }
            }
        }
        keys
    }
}

pub fn type_instances(document: &StateDocument, resource_type: &str) -> TypeInstances {
    let instances: Vec<Value> = document
        .resources
        .iter()
        .filter(|record| record.resource_type == resource_type)
        .flat_map(|record| record.instances.iter().map(|i| i.attributes.clone()))
        .collect();

    // Object keys serialize in sorted order, so the JSON text is a stable identity.
    let mut seen = HashSet::new();
    let unique = instances
        .iter()
        .filter(|attributes| seen.insert(attributes.to_string()))
        .cloned()
        .collect();

    TypeInstances {
        resource_type: resource_type.to_string(),
        instances,
        unique,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EphemeralMatch {
    pub resource_type: String,
    pub name: String,
    pub attributes: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EphemeralScan {
    pub keywords: Vec<String>,
    pub matches: Vec<EphemeralMatch>,
    /// `matches` de-duplicated on (type, name).
    pub unique: Vec<EphemeralMatch>,
}

impl EphemeralScan {
    pub fn unique_type_counts(&self) -> Vec<FrequencyEntry> {
        frequency(self.unique.iter().map(|m| m.resource_type.as_str()))
    }
}

/// Finds instances whose `attributes.name` contains one of `keywords`, ignoring case.
pub fn scan_ephemeral(document: &StateDocument, keywords: &[String]) -> EphemeralScan {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let mut matches = Vec::new();
    for record in &document.resources {
        for instance in &record.instances {
            let name = instance
                .attributes
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_NAME);
            let lowered = name.to_lowercase();

            if keywords.iter().any(|keyword| lowered.contains(keyword.as_str())) {
                matches.push(EphemeralMatch {
                    resource_type: record.resource_type.clone(),
                    name: name.to_string(),
                    attributes: instance.attributes.clone(),
                });
            }
        }
    }

    let mut seen = HashSet::new();
    let unique = matches
        .iter()
        .filter(|m| seen.insert((m.resource_type.clone(), m.name.clone())))
        .cloned()
        .collect();

    tracing::debug!(matches = matches.len(), "ephemeral scan complete");

    EphemeralScan {
        keywords,
        matches,
        unique,
    }
}
