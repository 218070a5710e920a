//! Document-store export adapter
//!
//! Reads a member collection export from disk. Two layouts are accepted:
//!
//! - a JSON array of documents (`[{...}, {...}]`)
//! - JSON lines, one document per line (the default export layout)
//!
//! The file is re-read on every fetch; nothing is cached.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{distinct_vanshes, vansh_matches, MemberBatch, MemberSource};
use crate::{Result, StorageError};

/// Member source backed by an export file
#[derive(Debug, Clone)]
pub struct JsonExportSource {
    path: PathBuf,
}

impl JsonExportSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<Value>> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            StorageError::io(format!("Cannot read {}: {}", self.path.display(), e)).with_source(e)
        })?;
        parse_export(&text)
    }
}

/// Parse export text into raw documents
///
/// Non-object documents are passed through untouched; only syntax errors fail.
pub fn parse_export(text: &str) -> Result<Vec<Value>> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        return match serde_json::from_str::<Value>(trimmed)? {
            Value::Array(items) => Ok(items),
            other => Err(StorageError::invalid_document(format!(
                "Expected a JSON array, found {}",
                kind_of(&other)
            ))),
        };
    }

    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line).map_err(|e| {
            StorageError::serialization(format!("Line {}: {}", idx + 1, e)).with_source(e)
        })?;
        records.push(value);
    }
    Ok(records)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl MemberSource for JsonExportSource {
    async fn fetch_vansh(&self, vansh: &str) -> Result<MemberBatch> {
        let records = self
            .load()
            .await?
            .into_iter()
            .filter(|r| vansh_matches(r, vansh))
            .collect();
        Ok(MemberBatch::new(Some(vansh.trim().to_string()), records))
    }

    async fn fetch_all(&self) -> Result<MemberBatch> {
        Ok(MemberBatch::new(None, self.load().await?))
    }

    async fn list_vanshes(&self) -> Result<Vec<String>> {
        Ok(distinct_vanshes(&self.load().await?))
    }
}
