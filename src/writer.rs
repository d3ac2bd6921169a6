use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncWriteExt, BufWriter};

/// How the output file was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// The file did not exist and was created.
    Create,
    /// An existing file was truncated and rewritten.
    Overwrite,
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteMode::Create => write!(f, "create"),
            WriteMode::Overwrite => write!(f, "overwrite"),
        }
    }
}

pub struct AmalgamationWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    mode: WriteMode,
}

impl AmalgamationWriter {
    /// Opens `path` for writing: overwrite if it exists, create-new otherwise.
    pub async fn open(path: &Path) -> Result<Self> {
        let exists = tokio::fs::try_exists(path)
            .await
            .with_context(|| format!("Failed to check output path: {}", path.display()))?;

        let mode = if exists {
            WriteMode::Overwrite
        } else {
            WriteMode::Create
        };

        let mut options = OpenOptions::new();
        options.write(true);
        match mode {
            WriteMode::Overwrite => options.truncate(true),
            WriteMode::Create => options.create_new(true),
        };

        let file = options
            .open(path)
            .await
            .with_context(|| format!("Failed to open output file ({mode}): {}", path.display()))?;

        debug!("Opened {} in {mode} mode", path.display());

        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
            mode,
        })
    }

    pub async fn write_document(&mut self, document: &str) -> Result<()> {
        self.writer
            .write_all(document.as_bytes())
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }

    /// Flushes buffered output and returns the mode the file was opened in.
    pub async fn finish(mut self) -> Result<WriteMode> {
        self.writer.flush().await.context("Failed to flush output")?;
        Ok(self.mode)
    }
}

/// Opens, writes and flushes in one go.
pub async fn write_document(path: &Path, document: &str) -> Result<WriteMode> {
    let mut writer = AmalgamationWriter::open(path).await?;
    writer.write_document(document).await?;
    writer.finish().await
}

/// `done: 10/18/2026 14:03:59`
pub fn completion_message(now: DateTime<Local>) -> String {
    format!("done: {}", now.format("%m/%d/%Y %H:%M:%S"))
}
