//! Taglens - image analysis client for tags and dominant colors
//!
//! This crate uploads a photo to a remote image-recognition API and
//! returns the tags and dominant colors the service extracts from it.
//! The `ImageAnalysis` trait abstracts the three underlying API calls
//! (upload, tags, colors); its provided `analyze` method sequences them
//! into one operation with fractional upload progress and a
//! degrade-to-empty failure policy.
//!
//! # Example
//!
//! ```rust,no_run
//! use taglens::{Credential, ImageAnalysis, TagLens, UploadRequest, progress};
//!
//! #[tokio::main]
//! async fn main() -> taglens::Result<()> {
//!     let analyzer = TagLens::builder()
//!         .credential(Credential::basic("api-key", "api-secret"))
//!         .build()?;
//!
//!     let request = UploadRequest::from_path("photo.jpg")?;
//!     let report = analyzer
//!         .analyze(request, progress::noop())
//!         .await;
//!
//!     for tag in &report.tags {
//!         println!("{tag}");
//!     }
//!     for color in &report.colors {
//!         println!("{} ({},{},{})", color.color_name, color.red, color.green, color.blue);
//!     }
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod error;
pub mod parse;
pub mod progress;
pub mod reachability;
pub mod router;
pub mod telemetry;
pub mod traits;
pub mod types;
mod version;

// Re-export main types at crate root
pub use analyzer::{ImageAnalyzer, TagLens, TagLensBuilder};
pub use error::{Result, TagLensError};
pub use progress::ProgressFn;
pub use reachability::{AlwaysReachable, Reachability};
pub use router::{ApiRoute, Credential, DEFAULT_BASE_URL, Router};
pub use traits::ImageAnalysis;
pub use version::{GIT_BRANCH, GIT_SHA, PKG_VERSION, version_string};

// Re-export all types
pub use types::{AnalysisReport, ContentId, ImageFormat, PhotoColor, UploadRequest};
