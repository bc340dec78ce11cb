// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Dashboard,
    Teachers,
    TeacherDetail,
    Academies,
    DailyReports,
    WeeklyReports,
}

impl PageKind {
    /// Subdirectory used for default export paths.
    pub fn export_subdir(&self) -> &'static str {
        match self {
            PageKind::Dashboard     => "dashboard",
            PageKind::Teachers
            | PageKind::TeacherDetail => "teachers",
            PageKind::Academies     => "academies",
            PageKind::DailyReports  => "daily",
            PageKind::WeeklyReports => "weekly",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    pub(crate) out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        path.push(format!("{}.{}", stem, self.format.ext()));
        path
    }

    pub fn default_dir_for(kind: PageKind) -> PathBuf {
        PathBuf::from(DEFAULT_OUT_DIR).join(kind.export_subdir())
    }

    pub fn set_default_dir_for_page(&mut self, kind: PageKind) {
        self.out_path.dir = Self::default_dir_for(kind);
    }

    pub fn current_dir(&self) -> &Path {
        &self.out_path.dir
    }

    /// Parse GUI text into dir + stem. Ignores pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        let p = Path::new(s);
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR).join(PageKind::Dashboard.export_subdir()),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub export: ExportOptions,
}
