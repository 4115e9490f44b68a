//! Telemetry metric name constants.
//!
//! Centralised metric names for taglens operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `taglens_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `operation` — API call made ("upload", "tags", "colors")
//! - `status` — outcome: "ok" or "error"

/// Total API requests issued.
///
/// Labels: `operation`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "taglens_requests_total";

/// Request duration in seconds.
///
/// Labels: `operation`.
pub const REQUEST_DURATION_SECONDS: &str = "taglens_request_duration_seconds";

/// Total image bytes successfully uploaded.
pub const UPLOAD_BYTES_TOTAL: &str = "taglens_upload_bytes_total";
