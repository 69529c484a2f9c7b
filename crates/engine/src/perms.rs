// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Directory and file creation with explicit permission bits.
//!
//! Log files may be written by more than one OS user across runs of the
//! same task, so created paths get their mode set after creation and the
//! process umask does not apply.

use std::fs;
use std::io;
use std::path::Path;

/// Mode for created log directories (group writable).
pub const LOG_DIR_MODE: u32 = 0o775;
/// Mode for newly created log files (world writable).
pub const LOG_FILE_MODE: u32 = 0o666;

/// Create `path` and any missing ancestors, setting `mode` on each
/// directory this call creates. Existing directories are left alone.
pub fn create_dir_all_with_mode(path: &Path, mode: u32) -> io::Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all_with_mode(parent, mode)?;
        }
    }
    match fs::create_dir(path) {
        Ok(()) => set_mode(path, mode),
        // Lost a race with another writer
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(e),
    }
}

/// Create an empty file at `path` with `mode` unless it already exists.
///
/// Returns `true` when the file was created.
pub fn create_file_with_mode(path: &Path, mode: u32) -> io::Result<bool> {
    match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(_) => {
            set_mode(path, mode)?;
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
#[path = "perms_tests.rs"]
mod tests;
