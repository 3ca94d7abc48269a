//! Filesystem writes for generated files.
//!
//! Each file lands through a temp-file-and-rename in its target directory,
//! so readers never observe a half-written file. Across files there is no
//! rollback: every write is attempted, completed siblings stay in place, and
//! the first failure is reported once all writers have settled.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;

use crate::error::AppError;

/// A rendered file waiting to be written.
#[derive(Debug, Clone)]
pub struct RenderedFile {
    /// Target path.
    pub path: PathBuf,
    /// Formatted source text.
    pub content: String,
}

impl RenderedFile {
    pub fn new<P: Into<PathBuf>>(path: P, content: String) -> Self {
        Self { path: path.into(), content }
    }
}

/// Create the directory for a new entry.
///
/// Plain `create_dir`: the boilerplates root must already exist, and the
/// collector has verified that the entry itself does not.
pub fn create_boilerplate_dir(path: &Path) -> Result<(), AppError> {
    fs::create_dir(path)
        .map_err(|source| AppError::CreateDir { path: path.to_path_buf(), source })
}

/// Write every file, one worker thread per file.
///
/// Waits for all workers before returning the first failure in file order.
pub fn write_all(files: &[RenderedFile]) -> Result<(), AppError> {
    let results: Vec<Result<(), AppError>> = thread::scope(|scope| {
        let handles: Vec<_> = files
            .iter()
            .map(|file| scope.spawn(move || write_atomic(&file.path, &file.content)))
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(_) => Err(AppError::Io(io::Error::other("file writer panicked"))),
            })
            .collect()
    });

    results.into_iter().collect()
}

/// Write `content` to `path` through a temp file in the same directory.
///
/// The temp file is synced before the rename, and removed again if any step
/// fails. Renaming over an existing file replaces it whole.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), AppError> {
    let temp = temp_path(path)?;

    let written = write_and_sync(&temp, content).and_then(|()| fs::rename(&temp, path));
    if let Err(source) = written {
        let _ = fs::remove_file(&temp);
        return Err(AppError::Write { path: path.to_path_buf(), source });
    }
    Ok(())
}

fn temp_path(target: &Path) -> Result<PathBuf, AppError> {
    let file_name = target.file_name().and_then(|name| name.to_str()).ok_or_else(|| {
        AppError::Write {
            path: target.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "target has no file name"),
        }
    })?;
    let parent = target.parent().unwrap_or_else(|| Path::new("."));
    Ok(parent.join(format!(".{file_name}.tmp")))
}

fn write_and_sync(path: &Path, content: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}
