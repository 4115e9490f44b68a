//! Analysis result types.

use serde::{Deserialize, Serialize};

use super::upload::ContentId;

/// A dominant color extracted from the analyzed image.
///
/// RGB components plus the closest named palette color. Produced only
/// from response entries carrying all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub color_name: String,
}

/// Aggregate result of one upload-and-analyze sequence.
///
/// A failed or degraded step leaves its field empty rather than failing
/// the whole sequence; the worst case is an entirely empty report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Identifier the service assigned to the upload, when it succeeded.
    pub upload_id: Option<ContentId>,
    /// Tag labels in service order; duplicates preserved.
    pub tags: Vec<String>,
    /// Dominant image colors.
    pub colors: Vec<PhotoColor>,
}

impl AnalysisReport {
    /// Report for a sequence that produced no results.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.colors.is_empty()
    }
}
