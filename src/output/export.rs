use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, TfStatsError};
use crate::group::GroupEntry;
use crate::resource::InstanceRow;

/// Appends `.csv` unless the path already ends with it.
pub fn csv_path(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == "csv") {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(".csv");
    PathBuf::from(name)
}

fn write_csv<T: Serialize>(path: &Path, header: &[&str], records: &[T]) -> Result<PathBuf> {
    let path = csv_path(path);
    let export_error = |source: csv::Error| TfStatsError::Export {
        path: path.clone(),
        source,
    };

    // Header written by hand so an empty export still has one.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .map_err(export_error)?;
    writer.write_record(header).map_err(export_error)?;
    for record in records {
        writer.serialize(record).map_err(export_error)?;
    }
    writer
        .flush()
        .map_err(|e| export_error(csv::Error::from(e)))?;

    tracing::info!(path = %path.display(), records = records.len(), "CSV export written");
    Ok(path)
}

/// Writes the flat listing; returns the path actually written.
pub fn export_rows(path: &Path, rows: &[InstanceRow]) -> Result<PathBuf> {
    write_csv(path, &InstanceRow::CSV_HEADER, rows)
}

pub fn export_groups(path: &Path, groups: &[GroupEntry]) -> Result<PathBuf> {
    write_csv(path, &GroupEntry::CSV_HEADER, groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_path_appends_extension() {
        assert_eq!(csv_path(Path::new("out")), PathBuf::from("out.csv"));
        assert_eq!(csv_path(Path::new("out.txt")), PathBuf::from("out.txt.csv"));
        assert_eq!(csv_path(Path::new("dir/out.csv")), PathBuf::from("dir/out.csv"));
    }

    #[test]
    fn test_export_rows_writes_header_and_records() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![
            InstanceRow {
                module: "root".to_string(),
                resource_type: "aws_instance".to_string(),
                resource_name: "web".to_string(),
                provider: "provider[\"registry.terraform.io/hashicorp/aws\"]".to_string(),
                index: 0,
            },
            InstanceRow {
                module: "module.app".to_string(),
                resource_type: "aws_instance".to_string(),
                resource_name: "web".to_string(),
                provider: "unknown".to_string(),
                index: 1,
            },
        ];

        let written = export_rows(&dir.path().join("resources"), &rows).unwrap();

        assert_eq!(written, dir.path().join("resources.csv"));
        let content = std::fs::read_to_string(&written).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "module,resource_type,resource_name,provider,index");
        assert_eq!(
            lines[1],
            "root,aws_instance,web,\"provider[\"\"registry.terraform.io/hashicorp/aws\"\"]\",0"
        );
        assert_eq!(lines[2], "module.app,aws_instance,web,unknown,1");
    }

    #[test]
    fn test_export_empty_rows_keeps_header() {
        let dir = tempfile::tempdir().unwrap();

        let written = export_rows(&dir.path().join("empty.csv"), &[]).unwrap();

        let content = std::fs::read_to_string(written).unwrap();
        assert_eq!(content, "module,resource_type,resource_name,provider,index\n");
    }

    #[test]
    fn test_export_groups() {
        let dir = tempfile::tempdir().unwrap();
        let groups = vec![GroupEntry {
            module: "root".to_string(),
            resource_type: "aws_s3_bucket".to_string(),
            resource_name: "logs".to_string(),
            provider: "unknown".to_string(),
            instance_count: 3,
        }];

        let written = export_groups(&dir.path().join("groups.csv"), &groups).unwrap();

        let content = std::fs::read_to_string(written).unwrap();
        assert_eq!(
            content,
            "module,resource_type,resource_name,provider,instance_count\nroot,aws_s3_bucket,logs,unknown,3\n"
        );
    }

    #[test]
    fn test_export_into_missing_directory_fails() {
        let result = export_rows(Path::new("/nonexistent/dir/out.csv"), &[]);
        assert!(matches!(result, Err(TfStatsError::Export { .. })));
    }
}
