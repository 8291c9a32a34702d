use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder;
use walkdir::WalkDir;

use crate::errors::ContentError;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    /// Find every file with the given extension below `dir`, sorted by path
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let wanted = extension.trim_start_matches('.');
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            if !entry.file_type().is_file() {
                continue;
            }
            let matches = entry
                .path()
                .extension()
                .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(wanted));
            if matches {
                result.push(entry.into_path());
            }
        }

        result.sort();
        Ok(result)
    }

    /// Find Markdown files below `dir`
    pub fn find_markdown_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        Self::find_files(dir, "md")
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        fs::read_to_string(path).map_err(|e| {
            match e.kind() {
                std::io::ErrorKind::InvalidData => ContentError::UnsupportedInputFormat(format!(
                    "{} is not valid UTF-8",
                    path.display()
                )),
                _ => ContentError::FileRead {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                },
            }
            .into()
        })
    }

    /// Write a string to a file.
    ///
    /// The content goes to a temporary file in the same directory which is then
    /// renamed over the destination, so readers never see a half-written file.
    /// An existing file keeps its permissions; a new one gets the same mode a
    /// plain create would give it.
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        let path = path.as_ref();
        let write_error = |reason: String| ContentError::FileWrite {
            path: path.to_path_buf(),
            reason,
        };

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self::ensure_dir(&parent)?;

        let mut builder = Builder::new();
        if let Some(permissions) = new_file_permissions() {
            builder.permissions(permissions);
        }
        let mut tmp = builder
            .tempfile_in(&parent)
            .map_err(|e| write_error(e.to_string()))?;
        if let Ok(metadata) = fs::metadata(path) {
            tmp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| write_error(e.to_string()))?;
        }
        tmp.write_all(content.as_bytes())
            .map_err(|e| write_error(e.to_string()))?;
        tmp.persist(path).map_err(|e| write_error(e.error.to_string()))?;

        Ok(())
    }

    /// Size of a file in bytes, 0 when it cannot be read
    pub fn file_size<P: AsRef<Path>>(path: P) -> u64 {
        fs::metadata(path).map(|m| m.len()).unwrap_or(0)
    }

    /// Path of `path` relative to `root`, '/'-separated.
    ///
    /// Falls back to the full path when `path` is not below `root`.
    pub fn relative_path<P1: AsRef<Path>, P2: AsRef<Path>>(root: P1, path: P2) -> String {
        let path = path.as_ref();
        let rel = path.strip_prefix(root.as_ref()).unwrap_or(path);
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Mode requested for new files; the process umask still applies
#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}
