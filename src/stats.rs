//! Summary statistics over the flattened instance rows.

use std::collections::{HashMap, HashSet};

use crate::resource::InstanceRow;
use crate::scope::is_hashicorp_type;
use crate::terraform::ResourceRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub value: String,
    pub count: usize,
}

/// Counts occurrences of each value, most frequent first.
///
/// Values with equal counts keep the order in which they were first seen.
pub fn frequency<'a, I>(values: I) -> Vec<FrequencyEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut entries: Vec<FrequencyEntry> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for value in values {
        match positions.get(value) {
            Some(&position) => entries[position].count += 1,
            None => {
                positions.insert(value, entries.len());
                entries.push(FrequencyEntry {
                    value: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable, so first-seen order survives among ties
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_instances: usize,
    /// Distinct (module, type, name) declarations, including ones with no instances.
    pub total_unique_resources: usize,
    pub unique_resource_types: usize,
    pub hashicorp_instances: usize,
    pub type_frequency: Vec<FrequencyEntry>,
    pub name_frequency: Vec<FrequencyEntry>,
}

/// `records` must already be restricted to the included set the `rows` were built from.
pub fn summarize(records: &[ResourceRecord], rows: &[InstanceRow]) -> Summary {
    let declarations: HashSet<(&str, &str, &str)> = records
        .iter()
        .map(|r| (r.module(), r.resource_type.as_str(), r.name.as_str()))
        .collect();
    let types: HashSet<&str> = records.iter().map(|r| r.resource_type.as_str()).collect();

    Summary {
        total_instances: rows.len(),
        total_unique_resources: declarations.len(),
        unique_resource_types: types.len(),
        hashicorp_instances: rows
            .iter()
            .filter(|row| is_hashicorp_type(&row.resource_type))
            .count(),
        type_frequency: frequency(rows.iter().map(|row| row.resource_type.as_str())),
        name_frequency: frequency(rows.iter().map(|row| row.resource_name.as_str())),
    }
}
