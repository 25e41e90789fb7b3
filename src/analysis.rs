use crate::group::{GroupEntry, group_rows};
use crate::reference::{CountCheck, reference_instance_count};
use crate::resource::{InstanceRow, flatten, is_included};
use crate::scope::ResourceScope;
use crate::stats::{Summary, summarize};
use crate::terraform::{ResourceRecord, StateDocument};

/// A loaded state together with the instance rows derived from it.
///
/// Rows are built once; every summary, grouping and export reads from them.
#[derive(Debug, Clone)]
pub struct StateAnalysis {
    document: StateDocument,
    scope: ResourceScope,
    records: Vec<ResourceRecord>,
    rows: Vec<InstanceRow>,
}

impl StateAnalysis {
    pub fn new(document: StateDocument, scope: ResourceScope) -> Self {
        let records: Vec<ResourceRecord> = document
            .resources
            .iter()
            .filter(|record| is_included(record, scope))
            .cloned()
            .collect();
        let rows = flatten(&records, scope);

        tracing::debug!(
            records = records.len(),
            instances = rows.len(),
            ?scope,
            "state flattened"
        );

        Self {
            document,
            scope,
            records,
            rows,
        }
    }

    pub fn document(&self) -> &StateDocument {
        &self.document
    }

    pub fn scope(&self) -> ResourceScope {
        self.scope
    }

    /// Managed records admitted by the scope, including those with no instances.
    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    pub fn rows(&self) -> &[InstanceRow] {
        &self.rows
    }

    pub fn total_instances(&self) -> usize {
        self.rows.len()
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.records, &self.rows)
    }

    pub fn groups(&self) -> Vec<GroupEntry> {
        group_rows(&self.rows)
    }

    pub fn count_check(&self) -> CountCheck {
        CountCheck {
            flattened: self.total_instances(),
            reference: reference_instance_count(self.document.raw()),
        }
    }
}
