//! Core ImageAnalysis trait

use async_trait::async_trait;
use tracing::warn;

use crate::Result;
use crate::progress::ProgressFn;
use crate::types::{AnalysisReport, ContentId, PhotoColor, UploadRequest};

/// The image analysis operations, plus the orchestration that combines
/// them into one logical call.
///
/// Implementations provide the three raw API calls; the provided
/// `analyze` sequences them. Consumers that only want the combined
/// result never touch the individual operations.
#[async_trait]
pub trait ImageAnalysis: Send + Sync {
    /// Upload an image, reporting fractional transmission progress.
    async fn upload(&self, request: UploadRequest, on_progress: ProgressFn) -> Result<ContentId>;

    /// Fetch the tag labels for an uploaded image.
    async fn tags(&self, upload_id: &ContentId) -> Result<Vec<String>>;

    /// Fetch the dominant colors for an uploaded image.
    async fn colors(&self, upload_id: &ContentId) -> Result<Vec<PhotoColor>>;

    /// Upload an image and collect its tags and dominant colors.
    ///
    /// Drives upload → tags → colors sequentially. The upload gates the
    /// follow-ups: if it fails in transit, returns non-2xx, or answers
    /// without an upload id, the sequence resolves to an empty report
    /// and neither follow-up is issued. Past that point each follow-up
    /// degrades independently — a failed tags or colors call empties
    /// that field alone.
    ///
    /// The returned future resolves exactly once on every terminal path;
    /// it never fails, the worst case is an empty report.
    async fn analyze(&self, request: UploadRequest, on_progress: ProgressFn) -> AnalysisReport {
        let upload_id = match self.upload(request, on_progress).await {
            Ok(id) => id,
            Err(error) => {
                warn!(%error, "upload failed, skipping tag and color lookup");
                return AnalysisReport::empty();
            }
        };

        let tags = match self.tags(&upload_id).await {
            Ok(tags) => tags,
            Err(error) => {
                warn!(%error, upload_id = %upload_id, "tag lookup failed");
                Vec::new()
            }
        };

        // Issued only after the tags call has completed, success or not.
        let colors = match self.colors(&upload_id).await {
            Ok(colors) => colors,
            Err(error) => {
                warn!(%error, upload_id = %upload_id, "color lookup failed");
                Vec::new()
            }
        };

        AnalysisReport {
            upload_id: Some(upload_id),
            tags,
            colors,
        }
    }
}
