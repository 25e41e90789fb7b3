use std::collections::BTreeMap;

use serde::Serialize;
use tabled::Tabled;

use crate::resource::InstanceRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
#[serde(rename_all = "snake_case")]
pub struct GroupEntry {
    #[tabled(rename = "Module")]
    pub module: String,
    #[tabled(rename = "Resource Type")]
    pub resource_type: String,
    #[tabled(rename = "Resource Name")]
    pub resource_name: String,
    #[tabled(rename = "Provider")]
    pub provider: String,
    #[tabled(rename = "Instance Count")]
    pub instance_count: usize,
}

impl GroupEntry {
    pub const CSV_HEADER: [&'static str; 5] = [
        "module",
        "resource_type",
        "resource_name",
        "provider",
        "instance_count",
    ];
}

/// Groups rows by (module, type, name, provider), sorted in that key order.
pub fn group_rows(rows: &[InstanceRow]) -> Vec<GroupEntry> {
    let mut counts: BTreeMap<(&str, &str, &str, &str), usize> = BTreeMap::new();

    for row in rows {
        let key = (
            row.module.as_str(),
            row.resource_type.as_str(),
            row.resource_name.as_str(),
            row.provider.as_str(),
        );
        *counts.entry(key).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(
            |((module, resource_type, resource_name, provider), instance_count)| GroupEntry {
                module: module.to_string(),
                resource_type: resource_type.to_string(),
                resource_name: resource_name.to_string(),
                provider: provider.to_string(),
                instance_count,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(module: &str, resource_type: &str, name: &str, provider: &str, index: usize) -> InstanceRow {
        InstanceRow {
            module: module.to_string(),
            resource_type: resource_type.to_string(),
            resource_name: name.to_string(),
            provider: provider.to_string(),
            index,
        }
    }

    #[test]
    fn test_group_counts_instances() {
        let rows = vec![
            row("root", "aws_instance", "web", "aws", 0),
            row("root", "aws_instance", "web", "aws", 1),
            row("root", "aws_s3_bucket", "bucket", "aws", 0),
        ];

        let groups = group_rows(&rows);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].resource_type, "aws_instance");
        assert_eq!(groups[0].instance_count, 2);
        assert_eq!(groups[1].resource_type, "aws_s3_bucket");
        assert_eq!(groups[1].instance_count, 1);
    }

    #[test]
    fn test_group_sort_order() {
        let rows = vec![
            row("root", "aws_vpc", "main", "aws", 0),
            row("module.app", "aws_vpc", "main", "aws", 0),
            row("root", "aws_iam_role", "b", "aws", 0),
            row("root", "aws_iam_role", "a", "aws.west", 0),
            row("root", "aws_iam_role", "a", "aws.east", 0),
        ];

        let keys: Vec<(String, String, String, String)> = group_rows(&rows)
            .into_iter()
            .map(|g| (g.module, g.resource_type, g.resource_name, g.provider))
            .collect();

        let expected = [
            ("module.app", "aws_vpc", "main", "aws"),
            ("root", "aws_iam_role", "a", "aws.east"),
            ("root", "aws_iam_role", "a", "aws.west"),
            ("root", "aws_iam_role", "b", "aws"),
            ("root", "aws_vpc", "main", "aws"),
        ];
        assert_eq!(keys.len(), expected.len());
        for (key, (module, ty, name, provider)) in keys.iter().zip(expected) {
            assert_eq!(
                (key.0.as_str(), key.1.as_str(), key.2.as_str(), key.3.as_str()),
                (module, ty, name, provider)
            );
        }
    }

    #[test]
    fn test_groups_partition_rows() {
        let rows: Vec<InstanceRow> = (0..7)
            .map(|i| row("root", "aws_instance", if i % 2 == 0 { "even" } else { "odd" }, "aws", i))
            .collect();

        let groups = group_rows(&rows);

        assert_eq!(groups.iter().map(|g| g.instance_count).sum::<usize>(), rows.len());
    }

    #[test]
    fn test_group_empty() {
        assert!(group_rows(&[]).is_empty());
    }
}
