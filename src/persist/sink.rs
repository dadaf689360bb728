use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write payload: {0}")]
    Io(#[from] std::io::Error),
    #[error("sink rejected payload: {0}")]
    Rejected(String),
}

/// Destination for autosaved payloads. The pump has no knowledge of what
/// storage sits behind this.
#[async_trait]
pub trait SaveSink: Send + Sync {
    async fn persist(&self, payload: &Value) -> Result<(), SaveError>;
}

/// Writes each payload as pretty JSON to a fixed path, creating the parent
/// directory on first use.
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SaveSink for JsonFileSink {
    async fn persist(&self, payload: &Value) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(payload)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}
