// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::config::ExportOptions;
use crate::flatten::{field_names, FlatRecord};
use crate::scrape::Harvest;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("failed to write {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("failed to encode {path}: {source}")]
    Json { path: PathBuf, source: serde_json::Error },
    #[error("failed to write {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
}

/// Write the session catalog, the raw shots and the flat table into
/// `export.out_dir`. Returns the paths written.
pub fn export(harvest: &Harvest, export: &ExportOptions) -> Result<Vec<PathBuf>, ExportError> {
    ensure_directory(&export.out_dir)?;
    let mut written = Vec::with_capacity(3);

    let path = export.sessions_path();
    write_json(&path, &harvest.sessions, export.pretty)?;
    written.push(path);

    let path = export.raw_path();
    write_json(&path, &harvest.raw, export.pretty)?;
    written.push(path);

    if harvest.flat.is_empty() {
        info!("No shots harvested; {} not written", export.flat_path().display());
    } else {
        let path = export.flat_path();
        write_flat_csv(&path, &harvest.flat)?;
        written.push(path);
    }

    Ok(written)
}

pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io { path: path.to_path_buf(), source };
    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);

    let res = if pretty {
        serde_json::to_writer_pretty(&mut out, value)
    } else {
        serde_json::to_writer(&mut out, value)
    };
    res.map_err(|source| ExportError::Json { path: path.to_path_buf(), source })?;

    out.flush().map_err(io_err)?;
    info!("Saved {}", path.display());
    Ok(())
}

/// Header row is the fixed field list; one row per record, in order.
pub fn write_flat_csv(path: &Path, records: &[FlatRecord]) -> Result<(), ExportError> {
    let csv_err = |source| ExportError::Csv { path: path.to_path_buf(), source };
    let mut w = csv::Writer::from_path(path).map_err(csv_err)?;

    w.write_record(field_names()).map_err(csv_err)?;
    for rec in records {
        w.write_record(rec.cells()).map_err(csv_err)?;
    }
    w.flush()
        .map_err(|source| ExportError::Io { path: path.to_path_buf(), source })?;

    info!("Saved {}", path.display());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)
            .map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}
