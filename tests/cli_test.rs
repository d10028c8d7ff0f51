use anyhow::Result;
use std::process::{Command, Output};
use tempfile::TempDir;

fn tw_toolbox(dir: &TempDir, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_tw-toolbox"))
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .arg("--data-dir")
        .arg(dir.path())
        .args(args)
        .output()?;
    Ok(output)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_id_validate_uppercases_input() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = tw_toolbox(&temp_dir, &["id", "validate", " a123456789 "])?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("有效的身分證字號: A123456789"));
    Ok(())
}

#[test]
fn test_id_validate_rejects_bad_checksum() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = tw_toolbox(&temp_dir, &["id", "validate", "A123456780"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("無效的身分證字號"));
    Ok(())
}

#[test]
fn test_id_generate_requires_single_region_letter() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = tw_toolbox(&temp_dir, &["id", "generate", "--region", "AB"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("無效的縣市代碼: AB"));

    let output = tw_toolbox(&temp_dir, &["id", "generate", "--region", "1"])?;
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_id_generate_lowercase_region_and_count() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = tw_toolbox(&temp_dir, &["id", "generate", "-r", "b", "-g", "2", "-n", "3"])?;
    assert!(output.status.success());

    let text = stdout(&output);
    let codes: Vec<&str> = text.lines().collect();
    assert_eq!(codes.len(), 3);
    for code in codes {
        assert!(code.starts_with("B2"), "{code} should start with B2");
        assert!(tw_toolbox::validate_id_code(code), "{code} should validate");
    }
    Ok(())
}

#[test]
fn test_year_conversion_both_directions() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = tw_toolbox(&temp_dir, &["year", "--minguo", "114/10/27"])?;
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("民國年日期 (YYY/MM/DD): 114/10/27"));
    assert!(text.contains("西元年日期 (YYYY/MM/DD): 2025/10/27"));

    let output = tw_toolbox(&temp_dir, &["year", "--western", "2025/02/30"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("西元年日期格式不正確 (例如: 2025/10/27)"));
    Ok(())
}

#[test]
fn test_year_empty_input_clears_both_fields() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = tw_toolbox(&temp_dir, &["year", "--minguo", ""])?;
    assert!(output.status.success());

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    assert_eq!(
        lines,
        ["民國年日期 (YYY/MM/DD):", "西元年日期 (YYYY/MM/DD):"]
    );
    Ok(())
}

#[test]
fn test_scan_history_delete_and_clear() -> Result<()> {
    let temp_dir = TempDir::new()?;

    assert!(tw_toolbox(&temp_dir, &["scan", "generate", "CASE1"])?.status.success());
    let output = tw_toolbox(&temp_dir, &["scan", "generate", "CASE2"])?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("CASE2_NB006"));
    assert!(temp_dir.path().join("scanCaseHistory.json").exists());

    let output = tw_toolbox(&temp_dir, &["scan", "history"])?;
    let text = stdout(&output);
    let names: Vec<&str> = text
        .lines()
        .filter_map(|line| line.split_whitespace().last())
        .collect();
    assert_eq!(names, ["CASE2", "CASE1"]);

    let output = tw_toolbox(&temp_dir, &["scan", "history", "--delete", "CASE2"])?;
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("CASE1"));
    assert!(!text.contains("CASE2"));

    let output = tw_toolbox(&temp_dir, &["scan", "history", "--clear"])?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("已清除所有歷史紀錄"));
    assert!(!temp_dir.path().join("scanCaseHistory.json").exists());

    let output = tw_toolbox(&temp_dir, &["scan", "history"])?;
    assert!(stdout(&output).contains("尚無歷史紀錄。"));
    Ok(())
}

#[test]
fn test_url_history_shows_notes_and_deletes_by_url() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let url = "https://example.com/?applNum=X1";

    let output = tw_toolbox(&temp_dir, &["url", "analyze", url, "--notes", "備註"])?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("applNum = X1"));

    let output = tw_toolbox(&temp_dir, &["url", "history"])?;
    let text = stdout(&output);
    assert!(text.contains("X1 (備註)"));
    assert!(text.contains(url));

    let output = tw_toolbox(&temp_dir, &["url", "history", "--delete", url])?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("尚無歷史紀錄。"));

    assert!(tw_toolbox(&temp_dir, &["url", "analyze", url])?.status.success());
    let output = tw_toolbox(&temp_dir, &["url", "history", "--clear"])?;
    assert!(stdout(&output).contains("已清除所有歷史紀錄"));
    assert!(!temp_dir.path().join("nbUrlHistory.json").exists());
    Ok(())
}

#[test]
fn test_url_analyze_rejects_plain_http() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = tw_toolbox(&temp_dir, &["url", "analyze", "http://example.com/?applNum=X1"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("nbUrlHistory.json").exists());
    Ok(())
}
