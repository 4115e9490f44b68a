//! Response parsing for the loosely-structured API bodies.
//!
//! The service wraps everything in a `result` envelope and nests the
//! interesting data a few levels down. Envelope fields are optional: a
//! missing `result` yields an empty list, and tag/color entries are
//! decoded one at a time so a malformed entry is dropped without
//! affecting its siblings.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::Result;
use crate::types::{ContentId, PhotoColor};

/// Language key selected from each tag's translation map.
const TAG_LANGUAGE: &str = "en";

// ============================================================================
// Upload
// ============================================================================

#[derive(Deserialize)]
struct UploadEnvelope {
    result: Option<UploadResult>,
}

#[derive(Deserialize)]
struct UploadResult {
    upload_id: Option<String>,
}

/// Extract the upload identifier from an upload response body.
///
/// `Ok(None)` when the body parses but the identifier is absent.
pub fn upload_id(body: &str) -> Result<Option<ContentId>> {
    let envelope: UploadEnvelope = serde_json::from_str(body)?;
    Ok(envelope
        .result
        .and_then(|r| r.upload_id)
        .map(ContentId::new))
}

// ============================================================================
// Tags
// ============================================================================

#[derive(Deserialize)]
struct TagsEnvelope {
    result: Option<TagsResult>,
}

#[derive(Deserialize)]
struct TagsResult {
    #[serde(default)]
    tags: Vec<Value>,
}

#[derive(Deserialize)]
struct TagEntry {
    tag: HashMap<String, String>,
}

/// Extract tag labels from a tags response body.
///
/// Each entry maps language codes to labels; the `en` label is
/// selected. Entries that fail to decode or lack that key are skipped.
pub fn tags(body: &str) -> Result<Vec<String>> {
    let envelope: TagsEnvelope = serde_json::from_str(body)?;
    let entries = envelope.result.map(|r| r.tags).unwrap_or_default();
    Ok(entries
        .into_iter()
        .filter_map(|value| serde_json::from_value::<TagEntry>(value).ok())
        .filter_map(|entry| entry.tag.get(TAG_LANGUAGE).cloned())
        .collect())
}

// ============================================================================
// Colors
// ============================================================================

#[derive(Deserialize)]
struct ColorsEnvelope {
    result: Option<ColorsResult>,
}

#[derive(Deserialize)]
struct ColorsResult {
    colors: Option<ColorsPayload>,
}

#[derive(Deserialize)]
struct ColorsPayload {
    #[serde(default)]
    image_colors: Vec<Value>,
}

#[derive(Deserialize)]
struct ColorEntry {
    r: u8,
    g: u8,
    b: u8,
    closest_palette_color: String,
}

/// Extract dominant colors from a colors response body.
///
/// Entries missing any of the four fields, or with components outside
/// [0, 255], are skipped.
pub fn colors(body: &str) -> Result<Vec<PhotoColor>> {
    let envelope: ColorsEnvelope = serde_json::from_str(body)?;
    let entries = envelope
        .result
        .and_then(|r| r.colors)
        .map(|c| c.image_colors)
        .unwrap_or_default();
    Ok(entries
        .into_iter()
        .filter_map(|value| serde_json::from_value::<ColorEntry>(value).ok())
        .map(|entry| PhotoColor {
            red: entry.r,
            green: entry.g,
            blue: entry.b,
            color_name: entry.closest_palette_color,
        })
        .collect())
}
