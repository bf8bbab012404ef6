use crate::ports::outbound::OutputPresenter;
use crate::shared::error::UploadError;
use crate::shared::Result;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing the upload report to a file
///
/// The report is written to a `.partial` sibling first and renamed into
/// place, so a reader polling the output path never sees half a report.
/// An existing symbolic link at the output path is refused.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: impl Into<String>) -> UploadError {
        UploadError::FileWrite {
            path: self.output_path.clone(),
            details: details.into(),
        }
    }

    fn staging_path(&self) -> PathBuf {
        let mut name: OsString = self
            .output_path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("report"));
        name.push(".partial");
        self.output_path.with_file_name(name)
    }

    fn check_destination(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(self
                    .write_error(format!(
                        "Parent directory does not exist: {}",
                        parent.display()
                    ))
                    .into());
            }
        }

        let is_symlink = fs::symlink_metadata(&self.output_path)
            .map(|m| m.is_symlink())
            .unwrap_or(false);
        if is_symlink {
            return Err(self
                .write_error("Output path is a symbolic link; refusing to write through it")
                .into());
        }

        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.check_destination()?;

        let staging = self.staging_path();
        fs::write(&staging, content)
            .and_then(|()| fs::rename(&staging, &self.output_path))
            .map_err(|e| {
                let _ = fs::remove_file(&staging);
                self.write_error(e.to_string())
            })?;

        eprintln!("📝 Report written to {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing the upload report to stdout
///
/// Always ends the output with a newline so the report composes with
/// line-oriented tools.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        let mut write = || -> io::Result<()> {
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()
        };
        write().map_err(|e| anyhow::anyhow!("Failed to write report to stdout: {}", e))?;
        Ok(())
    }
}
