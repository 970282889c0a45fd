// File line source
// reason: tokio buffered reader, strips `\n` and `\r\n`
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tracing::debug;

use linesift_core::port::{LineSource, SourceError};

/// Reads a text file line by line
pub struct FileLineSource {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    lines_read: usize,
}

impl FileLineSource {
    /// Open `path` for reading
    ///
    /// # Errors
    /// - SourceError::Open if the file cannot be opened
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).await.map_err(|e| SourceError::Open {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "Input opened");

        Ok(Self {
            path,
            lines: BufReader::new(file).lines(),
            lines_read: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LineSource for FileLineSource {
    async fn next_line(&mut self) -> Result<Option<String>, SourceError> {
        match self.lines.next_line().await {
            Ok(Some(line)) => {
                self.lines_read += 1;
                Ok(Some(line))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(SourceError::Read {
                lines_read: self.lines_read,
                reason: e.to_string(),
            }),
        }
    }
}
