//! Pipeline orchestration

pub mod processor;
pub mod result;

pub use processor::FamilyPipeline;
pub use result::{FamilyView, PipelineStats};
