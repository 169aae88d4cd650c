// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::config::options::ExportOptions;
use crate::csv;
use crate::engine::NormalizedDataset;

/// Write the dataset to the file named by `export`, creating parent directories.
/// Returns the path written to.
pub fn write_dataset(export: &ExportOptions, ds: &NormalizedDataset) -> io::Result<PathBuf> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(&path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    csv::write_dataset(&mut out, ds, export.include_headers, export.format.delim())?;
    out.flush()?;

    info!(path = %path.display(), rows = ds.len(), "dataset written");
    Ok(path)
}

/// Same bytes as `write_dataset`, to any writer (stdout, buffers).
pub fn print_dataset<W: Write>(w: W, export: &ExportOptions, ds: &NormalizedDataset) -> io::Result<()> {
    let mut out = BufWriter::new(w);
    csv::write_dataset(&mut out, ds, export.include_headers, export.format.delim())?;
    out.flush()
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
