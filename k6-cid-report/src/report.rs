use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::run_file::RunFileName;
use crate::summary::TestKind;

/// A header plus rows, rendered as comma-separated lines.
///
/// Fields are written as-is: service labels are fixed and metric values
/// are plain numbers, so no quoting is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    header: &'static [&'static str],
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn new(kind: TestKind) -> Self {
        Self {
            header: kind.header(),
            rows: Vec::new(),
        }
    }

    pub fn header(&self) -> &'static [&'static str] {
        self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn to_csv(&self) -> String {
        let mut out = self.header.join(",");
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.join(","));
            out.push('\n');
        }
        out
    }
}

/// Read every run under `config.out_dir` into one table per test kind.
///
/// A kind only appears when at least one test directory of that kind exists.
pub fn collect_tables(config: &ReportConfig) -> Result<BTreeMap<TestKind, CsvTable>> {
    let mut tables = BTreeMap::new();

    for (name, dir) in test_dirs(&config.out_dir)? {
        let kind = if name == config.find_provs_test {
            TestKind::FindProvs
        } else {
            TestKind::Fetch
        };
        let include_kubo = match kind {
            TestKind::FindProvs => config.include_kubo_find_provs,
            TestKind::Fetch => config.include_kubo_fetch,
        };

        let table = tables.entry(kind).or_insert_with(|| CsvTable::new(kind));
        for path in run_files(&dir)? {
            let summary = read_summary(&path)?;
            table.rows.extend(kind.rows(&summary, include_kubo, &path)?);
        }
        tracing::debug!(test = %name, ?kind, "processed test directory");
    }

    Ok(tables)
}

/// Convert all runs and write the tables. Returns the paths written.
pub fn generate(config: &ReportConfig) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for (kind, table) in collect_tables(config)? {
        let path = match kind {
            TestKind::FindProvs => &config.find_provs_csv,
            TestKind::Fetch => &config.fetch_csv,
        };
        write_table(path, &table)?;
        tracing::info!(path = %path.display(), rows = table.rows().len(), "wrote stats CSV");
        written.push(path.clone());
    }

    Ok(written)
}

fn test_dirs(out_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let entries = fs::read_dir(out_dir).map_err(|e| ReportError::io(out_dir, e))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ReportError::io(out_dir, e))?;
        let file_type = entry.file_type().map_err(|e| ReportError::io(entry.path(), e))?;
        if file_type.is_dir() {
            dirs.push((entry.file_name().to_string_lossy().into_owned(), entry.path()));
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn run_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| ReportError::io(dir, e))?;

    let mut runs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ReportError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| ReportError::io(&path, e))?;
        if !file_type.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        match RunFileName::parse(&name) {
            Some(key) => runs.push((key, name, path)),
            None => tracing::warn!(path = %path.display(), "skipping file without <N>vu_ prefix"),
        }
    }
    runs.sort();
    Ok(runs.into_iter().map(|(_, _, path)| path).collect())
}

fn read_summary(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    serde_json::from_str(&content).map_err(|source| ReportError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn write_table(path: &Path, table: &CsvTable) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))?;
    }
    fs::write(path, table.to_csv()).map_err(|e| ReportError::io(path, e))
}
