use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

// @module: File helpers for transcript conversion

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_file()
    }

    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        fs::create_dir_all(path).with_context(|| format!("Failed to create directory: {}", path.display()))
    }

    /// `<output_dir>/<input stem>.<extension>`
    ///
    /// Only the last extension of the input is replaced, so `talk.en.json3`
    /// becomes `talk.en.xml`.
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_file: P1,
        output_dir: P2,
        extension: &str,
    ) -> PathBuf {
        let mut file_name = input_file.as_ref().file_stem().unwrap_or_default().to_os_string();
        file_name.push(".");
        file_name.push(extension.trim_start_matches('.'));
        output_dir.as_ref().join(file_name)
    }

    /// Transcript inputs under `dir`, recursively, matched case-insensitively
    /// on extension and sorted by path
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let wanted = extension.trim_start_matches('.');
        let has_extension = |entry: &DirEntry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(wanted))
        };

        let mut files = Vec::new();
        for entry in WalkDir::new(dir.as_ref()).follow_links(true).sort_by_file_name() {
            let entry = entry.context("Failed to read directory entry")?;
            if has_extension(&entry) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }

    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Write `content`, creating missing parent directories first
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Self::ensure_dir(parent)?;
        }
        fs::write(path, content).with_context(|| format!("Failed to write to file: {}", path.display()))
    }
}
