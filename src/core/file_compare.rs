//! 檔案大小比對。

use crate::domain::model::{ComparisonRow, ComparisonStatus, FileEntry};
use crate::utils::error::{Result, ToolError};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Compares two file lists by name.
///
/// Rows follow the original list order, then files only present in the
/// modified list. With duplicate names the last entry of a list wins.
pub fn compare_files(original: &[FileEntry], modified: &[FileEntry]) -> Result<Vec<ComparisonRow>> {
    if original.is_empty() && modified.is_empty() {
        return Err(ToolError::NoFilesSelected);
    }

    let original_sizes: HashMap<&str, u64> =
        original.iter().map(|f| (f.name.as_str(), f.size)).collect();
    let modified_sizes: HashMap<&str, u64> =
        modified.iter().map(|f| (f.name.as_str(), f.size)).collect();

    let mut rows = Vec::with_capacity(original.len() + modified.len());

    for file in original {
        let row = match modified_sizes.get(file.name.as_str()) {
            Some(&modified_size) => {
                let difference = modified_size as i64 - file.size as i64;
                let status = match difference {
                    d if d > 0 => ComparisonStatus::Increased,
                    d if d < 0 => ComparisonStatus::Decreased,
                    _ => ComparisonStatus::Unchanged,
                };
                ComparisonRow {
                    name: file.name.clone(),
                    original_size: Some(file.size),
                    modified_size: Some(modified_size),
                    difference: Some(difference),
                    status,
                }
            }
            None => ComparisonRow {
                name: file.name.clone(),
                original_size: Some(file.size),
                modified_size: None,
                difference: None,
                status: ComparisonStatus::Deleted,
            },
        };
        rows.push(row);
    }

    for file in modified {
        if !original_sizes.contains_key(file.name.as_str()) {
            rows.push(ComparisonRow {
                name: file.name.clone(),
                original_size: None,
                modified_size: Some(file.size),
                difference: None,
                status: ComparisonStatus::Added,
            });
        }
    }

    tracing::debug!(
        "Compared {} original and {} modified files into {} rows",
        original.len(),
        modified.len(),
        rows.len()
    );

    Ok(rows)
}

/// Lists the regular files directly inside `dir`, sorted by name.
pub fn entries_from_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if metadata.is_file() {
            entries.push(FileEntry::new(
                entry.file_name().to_string_lossy(),
                metadata.len(),
            ));
        }
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "檔名")]
    name: &'a str,
    #[serde(rename = "原始大小 (Bytes)")]
    original_size: String,
    #[serde(rename = "修改後大小 (Bytes)")]
    modified_size: String,
    #[serde(rename = "差異 (Bytes)")]
    difference: String,
    #[serde(rename = "狀態")]
    status: String,
}

fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Writes the comparison table as CSV with a header row.
pub fn write_csv<W: Write>(rows: &[ComparisonRow], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(CsvRow {
            name: &row.name,
            original_size: cell(row.original_size),
            modified_size: cell(row.modified_size),
            difference: cell(row.difference),
            status: row.status.to_string(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}
