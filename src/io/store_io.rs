use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::item::{CheckedOrder, Item, WriteMode};
use crate::parse::{ParsedItems, parse_items, serialize_items};

/// Error type for checklist file I/O
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
}

impl StoreError {
    /// True when a read failed only because the file does not exist yet
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Read and parse the checklist file at `path`.
pub fn read_items(path: &Path, order: CheckedOrder) -> Result<ParsedItems, StoreError> {
    let bytes = fs::read(path).map_err(|e| StoreError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(parse_items(&text, order))
}

/// Serialize `items` and replace the checklist file at `path` with the result.
pub fn write_items(path: &Path, items: &[Item], mode: WriteMode) -> Result<(), StoreError> {
    let content = serialize_items(items);
    let result = match mode {
        WriteMode::Atomic => atomic_write(path, content.as_bytes()),
        WriteMode::Truncate => fs::write(path, content.as_bytes()),
    };
    result.map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write `content` to `path` atomically using a temp file + rename.
///
/// A symlinked `path` is followed so the rename replaces the link's target,
/// and an existing file keeps its permissions.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let target = resolve_target(path)?;
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    match fs::metadata(&target) {
        Ok(meta) => tmp.as_file().set_permissions(meta.permissions())?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}

/// The real file behind `path`, or `path` itself when it does not exist yet.
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(target) => Ok(target),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(e),
    }
}
