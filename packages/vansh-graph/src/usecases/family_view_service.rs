//! Family View Service - use-case layer over a `MemberSource`
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   fetch_vansh   ┌───────────────────┐   process    ┌────────────────┐
//! │ MemberSource │ ──────────────▶ │ FamilyViewService │ ───────────▶ │ FamilyPipeline │
//! └──────────────┘                 └───────────────────┘              └────────────────┘
//! ```
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use vansh_graph::usecases::FamilyViewService;
//! use vansh_storage::JsonExportSource;
//!
//! let service = FamilyViewService::new(JsonExportSource::new("members.json"));
//! let view = service.family_view("12").await?;
//! println!("{} members rendered", view.stats.tree_nodes);
//! ```

use tracing::info;
use vansh_storage::MemberSource;

use crate::errors::Result;
use crate::features::relationship::RelatedMember;
use crate::pipeline::{FamilyPipeline, FamilyView};
use crate::shared::models::SerialKey;

pub struct FamilyViewService<S: MemberSource> {
    source: S,
    pipeline: FamilyPipeline,
}

impl<S: MemberSource> FamilyViewService<S> {
    pub fn new(source: S) -> Self {
        Self::with_pipeline(source, FamilyPipeline::default())
    }

    pub fn with_pipeline(source: S, pipeline: FamilyPipeline) -> Self {
        Self { source, pipeline }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn pipeline(&self) -> &FamilyPipeline {
        &self.pipeline
    }

    /// Tree (and layout) for one vansh; an unknown vansh gives an empty view
    pub async fn family_view(&self, vansh: &str) -> Result<FamilyView> {
        let batch = self.source.fetch_vansh(vansh).await?;
        info!("family_view: fetched {} records for vansh {}", batch.len(), vansh);
        Ok(self.pipeline.process(&batch.records, vansh))
    }

    /// Relationship list for `focal`; `Ok(None)` when it is not in the vansh
    pub async fn relationships(
        &self,
        vansh: &str,
        focal: &SerialKey,
    ) -> Result<Option<Vec<RelatedMember>>> {
        let batch = self.source.fetch_vansh(vansh).await?;
        Ok(self.pipeline.relationships(&batch.records, vansh, focal))
    }

    pub async fn list_vanshes(&self) -> Result<Vec<String>> {
        Ok(self.source.list_vanshes().await?)
    }
}
