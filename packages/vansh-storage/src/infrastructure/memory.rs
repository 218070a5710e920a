//! In-memory member source

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{distinct_vanshes, vansh_matches, MemberBatch, MemberSource};
use crate::Result;

/// Member source over a fixed document list
///
/// Used by tests and by callers that already hold the documents.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemberSource {
    records: Vec<Value>,
}

impl InMemoryMemberSource {
    pub fn new(records: Vec<Value>) -> Self {
        Self { records }
    }

    /// Append one document
    pub fn push(&mut self, record: Value) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl MemberSource for InMemoryMemberSource {
    async fn fetch_vansh(&self, vansh: &str) -> Result<MemberBatch> {
        let records = self
            .records
            .iter()
            .filter(|r| vansh_matches(r, vansh))
            .cloned()
            .collect();
        Ok(MemberBatch::new(Some(vansh.trim().to_string()), records))
    }

    async fn fetch_all(&self) -> Result<MemberBatch> {
        Ok(MemberBatch::new(None, self.records.clone()))
    }

    async fn list_vanshes(&self) -> Result<Vec<String>> {
        Ok(distinct_vanshes(&self.records))
    }
}
