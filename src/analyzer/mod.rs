//! Analyzer implementations

mod builder;
mod http;

pub use builder::{TagLens, TagLensBuilder};
pub use http::ImageAnalyzer;
