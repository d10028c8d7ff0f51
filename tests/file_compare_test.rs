use anyhow::Result;
use std::fs;
use tempfile::TempDir;
use tw_toolbox::core::file_compare::{compare_files, entries_from_dir, write_csv};
use tw_toolbox::core::ComparisonStatus;

#[test]
fn test_compare_directories() -> Result<()> {
    let original = TempDir::new()?;
    let modified = TempDir::new()?;

    fs::write(original.path().join("policy.pdf"), vec![0u8; 100])?;
    fs::write(original.path().join("removed.pdf"), vec![0u8; 10])?;
    fs::create_dir(original.path().join("subdir"))?;
    fs::write(modified.path().join("policy.pdf"), vec![0u8; 80])?;
    fs::write(modified.path().join("added.pdf"), vec![0u8; 5])?;

    let original_entries = entries_from_dir(original.path())?;
    let modified_entries = entries_from_dir(modified.path())?;
    assert_eq!(original_entries.len(), 2, "directories are skipped");

    let rows = compare_files(&original_entries, &modified_entries)?;
    let statuses: Vec<(&str, ComparisonStatus)> =
        rows.iter().map(|r| (r.name.as_str(), r.status)).collect();
    assert_eq!(
        statuses,
        [
            ("policy.pdf", ComparisonStatus::Decreased),
            ("removed.pdf", ComparisonStatus::Deleted),
            ("added.pdf", ComparisonStatus::Added),
        ]
    );
    assert_eq!(rows[0].difference, Some(-20));

    let mut csv = Vec::new();
    write_csv(&rows, &mut csv)?;
    let text = String::from_utf8(csv)?;
    assert!(text.contains("policy.pdf,100,80,-20,減少"));
    Ok(())
}

#[test]
fn test_missing_directory_is_io_error() {
    let err = entries_from_dir("/nonexistent/tw-toolbox-compare").unwrap_err();
    assert!(matches!(err, tw_toolbox::ToolError::IoError(_)));
}
