use std::fmt::Write;

use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::group::GroupEntry;
use crate::inspect::{EphemeralScan, TypeInstances};
use crate::reference::{CountCheck, REFERENCE_EXCLUDED_TYPES};
use crate::resource::InstanceRow;
use crate::scope::ResourceScope;
use crate::stats::{FrequencyEntry, Summary};

fn styled<T: Tabled>(items: &[T]) -> String {
    Table::new(items).with(Style::psql()).to_string()
}

pub fn render_rows(rows: &[InstanceRow]) -> String {
    format!("Extracted Managed Resources:\n{}", styled(rows))
}

pub fn render_groups(groups: &[GroupEntry]) -> String {
    format!("Grouped Resource Information:\n{}", styled(groups))
}

pub fn render_count(total_instances: usize) -> String {
    format!("Total number of resource instances: {}", total_instances)
}

pub fn render_frequency(label: &str, entries: &[FrequencyEntry]) -> String {
    let mut builder = Builder::default();
    builder.push_record([label.to_string(), "Count".to_string()]);
    for entry in entries {
        builder.push_record([entry.value.clone(), entry.count.to_string()]);
    }
    builder.build().with(Style::psql()).to_string()
}

pub fn render_summary(summary: &Summary, scope: ResourceScope) -> String {
    let mut out = String::from("Aggregate Information:\n");

    // NOTE: fmt::Write for String never fails
    if scope == ResourceScope::OnlyHashicorp {
        let _ = writeln!(
            out,
            "  Total HashiCorp related resource instances: {}",
            summary.hashicorp_instances
        );
    } else {
        let _ = writeln!(
            out,
            "  Total number of resource instances: {}",
            summary.total_instances
        );
        if scope != ResourceScope::ExcludeHashicorp {
            let _ = writeln!(
                out,
                "  Total HashiCorp related resource instances: {}",
                summary.hashicorp_instances
            );
        }
    }
    let _ = writeln!(
        out,
        "  Total number of unique resources: {}",
        summary.total_unique_resources
    );
    let _ = writeln!(
        out,
        "  Total number of unique resource types: {}",
        summary.unique_resource_types
    );

    let _ = write!(
        out,
        "\nUnique Resource Types:\n{}\n\nUnique Resource Names:\n{}",
        render_frequency("Resource Type", &summary.type_frequency),
        render_frequency("Resource Name", &summary.name_frequency)
    );
    out
}

pub fn render_count_check(check: &CountCheck, scope: ResourceScope) -> String {
    let mut out = format!(
        "DEBUG: flattened instance count: {}\nDEBUG: reference (jq) instance count: {}",
        check.flattened, check.reference
    );

    if !check.is_consistent() {
        let _ = write!(
            out,
            "\nDISCREPANCY: counts differ by {} (the reference count excludes {})",
            check.difference(),
            REFERENCE_EXCLUDED_TYPES.join(", ")
        );
        if scope != ResourceScope::All {
            out.push_str("\nDISCREPANCY: a HashiCorp scope filter is active; the reference count ignores it");
        }
    }
    out
}

fn attribute_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn render_type_instances(result: &TypeInstances, detailed: bool) -> String {
    if result.instances.is_empty() {
        return format!(
            "No '{}' instances found in the Terraform state file.",
            result.resource_type
        );
    }

    let mut out = format!(
        "{} Extraction Summary:\n  Total '{}' instances found: {}\n  Total unique '{}' instances: {}",
        result.resource_type,
        result.resource_type,
        result.instances.len(),
        result.resource_type,
        result.unique.len()
    );

    if detailed {
        let keys = result.attribute_keys();
        let mut builder = Builder::default();
        builder.push_record(keys.clone());
        for attributes in &result.unique {
            builder.push_record(keys.iter().map(|key| attribute_cell(attributes.get(key))));
        }
        let _ = write!(
            out,
            "\n\nUnique {} Instances:\n{}",
            result.resource_type,
            builder.build().with(Style::psql())
        );
    }
    out
}

pub fn render_ephemeral(scan: &EphemeralScan, with_attributes: bool) -> String {
    if scan.matches.is_empty() {
        return "No matching resources found in the Terraform state file.".to_string();
    }

    let type_counts = scan.unique_type_counts();
    let mut out = format!(
        "Resource Extraction Summary:\n  Keywords used for filtering: {}\n  Total matching instances found: {}\n  Total unique matching instances: {}\n  Total unique resource types: {}\n  Unique resource type counts:\n",
        scan.keywords.join(", "),
        scan.matches.len(),
        scan.unique.len(),
        type_counts.len()
    );
    for entry in &type_counts {
        let _ = writeln!(out, "   - {}: {}", entry.value, entry.count);
    }

    let mut builder = Builder::default();
    let mut header = vec!["Resource Type".to_string(), "Resource Name".to_string()];
    if with_attributes {
        header.push("Attributes".to_string());
    }
    builder.push_record(header);
    for found in &scan.unique {
        let mut record = vec![found.resource_type.clone(), found.name.clone()];
        if with_attributes {
            record.push(found.attributes.to_string());
        }
        builder.push_record(record);
    }

    let _ = write!(
        out,
        "\nUnique Matching Resources:\n{}",
        builder.build().with(Style::psql())
    );
    out
}
