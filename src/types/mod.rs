//! Public types for the taglens API.

mod report;
mod upload;

pub use report::{AnalysisReport, PhotoColor};
pub use upload::{ContentId, ImageFormat, UploadRequest};
