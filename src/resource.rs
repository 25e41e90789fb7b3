use serde::Serialize;
use tabled::Tabled;

use crate::scope::ResourceScope;
use crate::terraform::ResourceRecord;

/// One concrete resource instance, flattened out of its parent record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
#[serde(rename_all = "snake_case")]
pub struct InstanceRow {
    #[tabled(rename = "Module")]
    pub module: String,
    #[tabled(rename = "Resource Type")]
    pub resource_type: String,
    #[tabled(rename = "Resource Name")]
    pub resource_name: String,
    #[tabled(rename = "Provider")]
    pub provider: String,
    #[tabled(rename = "Index")]
    pub index: usize,
}

impl InstanceRow {
    pub const CSV_HEADER: [&'static str; 5] = [
        "module",
        "resource_type",
        "resource_name",
        "provider",
        "index",
    ];
}

/// Whether a record takes part in the report: managed mode and admitted by `scope`.
pub fn is_included(record: &ResourceRecord, scope: ResourceScope) -> bool {
    record.is_managed() && scope.admits(&record.resource_type)
}

/// Expands every included record into one row per entry of its `instances` list.
pub fn flatten(records: &[ResourceRecord], scope: ResourceScope) -> Vec<InstanceRow> {
    records
        .iter()
        .filter(|record| is_included(record, scope))
        .flat_map(|record| {
            (0..record.instances.len()).map(move |index| InstanceRow {
                module: record.module().to_string(),
                resource_type: record.resource_type.clone(),
                resource_name: record.name.clone(),
                provider: record.provider().to_string(),
                index,
            })
        })
        .collect()
}
