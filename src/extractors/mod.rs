// src/extractors/mod.rs
pub mod paragraph;
pub mod segmenter;
pub mod sentence;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use segmenter::{ParagraphRule, ReportSegmenter};
