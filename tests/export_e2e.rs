// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use teacherhub::config::options::{ExportFormat, ExportOptions, PageKind};
use teacherhub::csv;
use teacherhub::file;
use teacherhub::table::DataSet;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("teacherhub_e2e_{name}"));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample() -> DataSet {
    DataSet {
        headers: Some(vec!["강사명".into(), "학원".into(), "언급".into()]),
        rows: vec![
            vec!["김수학".into(), "대성학원".into(), "42".into()],
            vec!["이국어, 별명".into(), "종로학원".into(), "17".into()],
        ],
    }
}

#[test]
fn format_controls_the_extension() {
    let dir = tmp_dir("ext");
    let mut opts = ExportOptions::default();
    let mut file_path = dir.clone();
    file_path.push("rank.txt");
    opts.set_path(file_path.to_str().unwrap());

    // pasted extension is dropped; the format picks it
    opts.format = ExportFormat::Csv;
    assert!(opts.out_path().to_string_lossy().ends_with("rank.csv"));
    opts.format = ExportFormat::Tsv;
    assert!(opts.out_path().to_string_lossy().ends_with("rank.tsv"));
}

#[test]
fn csv_export_quotes_embedded_commas() {
    let dir = tmp_dir("quoting");
    let mut opts = ExportOptions::default();
    let mut file_path = dir.clone();
    file_path.push("teachers");
    opts.set_path(file_path.to_str().unwrap());
    opts.include_headers = true;

    let written = file::write_export(&opts, &sample()).unwrap();
    let content = fs::read_to_string(&written).unwrap();
    assert!(content.starts_with("강사명,학원,언급"));
    assert!(content.contains("\"이국어, 별명\""));

    // and it parses back to the same cells
    let parsed = csv::parse_rows(&content, ',');
    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed[2][0], "이국어, 별명");
}

#[test]
fn tsv_export_skips_headers_when_asked() {
    let dir = tmp_dir("tsv");
    let mut opts = ExportOptions::default();
    let mut file_path = dir.clone();
    file_path.push("teachers");
    opts.set_path(file_path.to_str().unwrap());
    opts.format = ExportFormat::Tsv;
    opts.include_headers = false;

    let written = file::write_export(&opts, &sample()).unwrap();
    let content = fs::read_to_string(&written).unwrap();
    assert!(!content.contains("강사명\t학원"));
    assert!(content.starts_with("김수학\t대성학원\t42"));
}

#[test]
fn export_creates_missing_directories() {
    let dir = tmp_dir("mkdir");
    let mut opts = ExportOptions::default();
    let mut file_path = dir.clone();
    file_path.push("nested");
    file_path.push("deeper");
    file_path.push("out");
    opts.set_path(file_path.to_str().unwrap());

    let written = file::write_export(&opts, &sample()).unwrap();
    assert!(written.exists());
    assert!(written.to_string_lossy().contains("deeper"));
}

#[test]
fn default_dirs_follow_the_page() {
    assert!(
        ExportOptions::default_dir_for(PageKind::WeeklyReports)
            .to_string_lossy()
            .ends_with("weekly")
    );
    assert!(
        ExportOptions::default_dir_for(PageKind::TeacherDetail)
            .to_string_lossy()
            .ends_with("teachers")
    );
}
