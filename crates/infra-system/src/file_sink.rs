// File sinks, one per category, truncated on open
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::debug;

use linesift_core::domain::Category;
use linesift_core::port::{RecordSink, SinkError, SinkFactory};

/// Creates `<dir>/<category file name>` for each category
pub struct FileSinkFactory {
    dir: PathBuf,
}

impl FileSinkFactory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the sink file for `category`
    pub fn path_for(&self, category: Category) -> PathBuf {
        self.dir.join(category.file_name())
    }
}

#[async_trait]
impl SinkFactory for FileSinkFactory {
    async fn open(&self, category: Category) -> Result<Box<dyn RecordSink>, SinkError> {
        let path = self.path_for(category);
        let file = File::create(&path).await.map_err(|e| SinkError::Open {
            target: path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "Sink file created");

        Ok(Box::new(FileSink {
            path,
            writer: BufWriter::new(file),
        }))
    }
}

struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileSink {
    fn target(&self) -> String {
        self.path.display().to_string()
    }
}

#[async_trait]
impl RecordSink for FileSink {
    async fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        let written = async {
            self.writer.write_all(line.as_bytes()).await?;
            self.writer.write_all(b"\n").await
        }
        .await;
        written.map_err(|e| SinkError::Write {
            target: self.target(),
            reason: e.to_string(),
        })
    }

    async fn close(&mut self) -> Result<(), SinkError> {
        // Flushes the buffer, then the file
        self.writer.shutdown().await.map_err(|e| SinkError::Close {
            target: self.target(),
            reason: e.to_string(),
        })
    }
}
