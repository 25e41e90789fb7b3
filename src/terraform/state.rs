//! Terraform state parser.
//!
//! Reads tfstate v4 JSON documents into typed resource records. Records that do not
//! have the expected shape are skipped (and counted) rather than failing the load.

use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{Result, TfStatsError};

pub const MANAGED_MODE: &str = "managed";
pub const ROOT_MODULE: &str = "root";
pub const UNKNOWN_PROVIDER: &str = "unknown";

#[derive(Debug, Clone)]
pub struct StateDocument {
    pub version: Option<u64>,
    pub terraform_version: Option<String>,
    pub serial: Option<u64>,
    pub lineage: Option<String>,
    pub resources: Vec<ResourceRecord>,
    /// Elements of `resources` that were not valid resource records.
    pub skipped_records: usize,
    raw: Value,
}

impl StateDocument {
    /// `origin` names the document in error messages (usually the file path).
    pub fn from_value(raw: Value, origin: &str) -> Result<Self> {
        let items = raw
            .get("resources")
            .and_then(Value::as_array)
            .ok_or_else(|| TfStatsError::MissingResources {
                origin: origin.to_string(),
            })?;

        let mut resources = Vec::with_capacity(items.len());
        let mut skipped_records = 0;

        for (position, item) in items.iter().enumerate() {
            match ResourceRecord::deserialize(item) {
                Ok(record) => resources.push(record),
                Err(e) => {
                    skipped_records += 1;
                    tracing::warn!(position, error = %e, "skipping malformed resource record");
                }
            }
        }

        Ok(Self {
            version: raw.get("version").and_then(Value::as_u64),
            terraform_version: raw
                .get("terraform_version")
                .and_then(Value::as_str)
                .map(str::to_string),
            serial: raw.get("serial").and_then(Value::as_u64),
            lineage: raw
                .get("lineage")
                .and_then(Value::as_str)
                .map(str::to_string),
            resources,
            skipped_records,
            raw,
        })
    }

    /// The document exactly as parsed, before any typed interpretation.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

/// Reads and parses the state file at `path`.
pub fn load_state(path: &Path) -> Result<StateDocument> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            TfStatsError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            TfStatsError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let raw: Value =
        serde_json::from_str(&content).map_err(|source| TfStatsError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;

    let document = StateDocument::from_value(raw, &path.display().to_string())?;

    tracing::debug!(
        path = %path.display(),
        resources = document.resources.len(),
        skipped = document.skipped_records,
        terraform_version = document.terraform_version.as_deref().unwrap_or("unknown"),
        "state file loaded"
    );

    Ok(document)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceRecord {
    #[serde(default, deserialize_with = "string_or_none")]
    pub mode: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
    #[serde(default, deserialize_with = "string_or_none")]
    pub module: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub provider: Option<String>,
    #[serde(default, deserialize_with = "instances_or_empty")]
    pub instances: Vec<Instance>,
}

impl ResourceRecord {
    pub fn is_managed(&self) -> bool {
        self.mode.as_deref() == Some(MANAGED_MODE)
    }

    pub fn module(&self) -> &str {
        self.module.as_deref().unwrap_or(ROOT_MODULE)
    }

    pub fn provider(&self) -> &str {
        self.provider.as_deref().unwrap_or(UNKNOWN_PROVIDER)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// `count` index or `for_each` key, when the resource is expanded.
    pub index_key: Option<Value>,
    pub attributes: Value,
}

impl From<Value> for Instance {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => Self {
                index_key: fields.remove("index_key"),
                attributes: fields
                    .remove("attributes")
                    .unwrap_or_else(|| Value::Object(Default::default())),
            },
            _ => Self {
                index_key: None,
                attributes: Value::Object(Default::default()),
            },
        }
    }
}

// NOTE: A non-sequence `instances` field counts as zero instances.
fn instances_or_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Instance>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.into_iter().map(Instance::from).collect(),
        _ => Vec::new(),
    })
}

// NOTE: Optional fields of the wrong JSON type are treated as absent.
fn string_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}
