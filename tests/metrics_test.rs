//! Tests for metrics integration.
//!
//! Uses `metrics_util::debugging::DebuggingRecorder` to capture and assert
//! on emitted metrics without needing a real exporter.

use metrics_util::MetricKind;
use metrics_util::debugging::{DebugValue, DebuggingRecorder};
use serde_json::json;
use taglens::{Credential, ImageAnalysis, TagLens, UploadRequest, progress, telemetry};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const JPEG_HEADER: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

// ============================================================================
// Snapshot type alias for readability
// ============================================================================

type SnapshotVec = Vec<(
    metrics_util::CompositeKey,
    Option<metrics::Unit>,
    Option<metrics::SharedString>,
    DebugValue,
)>;

// ============================================================================
// Helpers
// ============================================================================

/// Sum all counter values matching a given metric name.
fn counter_total(snapshot: &SnapshotVec, name: &str) -> u64 {
    snapshot
        .iter()
        .filter(|(key, _, _, _)| key.kind() == MetricKind::Counter && key.key().name() == name)
        .map(|(_, _, _, value)| match value {
            DebugValue::Counter(v) => *v,
            _ => 0,
        })
        .sum()
}

/// Sum counter values matching a metric name and a label pair.
fn counter_with_label(snapshot: &SnapshotVec, name: &str, label: &str, value: &str) -> u64 {
    snapshot
        .iter()
        .filter(|(key, _, _, _)| {
            key.kind() == MetricKind::Counter
                && key.key().name() == name
                && key
                    .key()
                    .labels()
                    .any(|l| l.key() == label && l.value() == value)
        })
        .map(|(_, _, _, v)| match v {
            DebugValue::Counter(n) => *n,
            _ => 0,
        })
        .sum()
}

/// Check if any histogram entries exist for a given metric name.
fn has_histogram(snapshot: &SnapshotVec, name: &str) -> bool {
    snapshot
        .iter()
        .any(|(key, _, _, _)| key.kind() == MetricKind::Histogram && key.key().name() == name)
}

// ============================================================================
// Tests
// ============================================================================

/// Runs async code within a local recorder scope on the multi-thread runtime.
///
/// `block_in_place` ensures the sync `with_local_recorder` closure stays
/// on the current thread while `block_on` drives the inner async work.
#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn successful_analysis_records_metrics() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                let mock_server = MockServer::start().await;
                Mock::given(method("POST"))
                    .and(path("/uploads"))
                    .respond_with(
                        ResponseTemplate::new(200)
                            .set_body_json(json!({"result": {"upload_id": "abc"}})),
                    )
                    .mount(&mock_server)
                    .await;
                Mock::given(method("GET"))
                    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": {}})))
                    .mount(&mock_server)
                    .await;

                let analyzer = TagLens::builder()
                    .base_url(mock_server.uri())
                    .credential(Credential::basic("key", "secret"))
                    .build()
                    .unwrap();
                let request = UploadRequest::from_bytes(JPEG_HEADER).unwrap();
                analyzer.analyze(request, progress::noop()).await
            })
        })
    });

    let snapshot = snapshotter.snapshot().into_vec();

    let count = counter_total(&snapshot, telemetry::REQUESTS_TOTAL);
    assert_eq!(count, 3, "one request counter per API call");
    assert_eq!(
        counter_with_label(&snapshot, telemetry::REQUESTS_TOTAL, "status", "ok"),
        3
    );

    assert!(
        has_histogram(&snapshot, telemetry::REQUEST_DURATION_SECONDS),
        "expected a duration histogram entry"
    );

    let bytes = counter_total(&snapshot, telemetry::UPLOAD_BYTES_TOTAL);
    assert_eq!(bytes, JPEG_HEADER.len() as u64);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn failed_upload_records_error_metrics() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                let mock_server = MockServer::start().await;
                Mock::given(method("POST"))
                    .and(path("/uploads"))
                    .respond_with(ResponseTemplate::new(500))
                    .mount(&mock_server)
                    .await;

                let analyzer = TagLens::builder()
                    .base_url(mock_server.uri())
                    .credential(Credential::basic("key", "secret"))
                    .build()
                    .unwrap();
                let request = UploadRequest::from_bytes(JPEG_HEADER).unwrap();
                analyzer.analyze(request, progress::noop()).await
            })
        })
    });

    let snapshot = snapshotter.snapshot().into_vec();

    // Only the upload is attempted; it fails and no bytes are counted.
    assert_eq!(
        counter_with_label(&snapshot, telemetry::REQUESTS_TOTAL, "status", "error"),
        1
    );
    assert_eq!(
        counter_with_label(&snapshot, telemetry::REQUESTS_TOTAL, "operation", "upload"),
        1
    );
    assert_eq!(counter_total(&snapshot, telemetry::UPLOAD_BYTES_TOTAL), 0);
}

#[tokio::test]
async fn metrics_are_noop_without_recorder() {
    // Verify no panics when no recorder is installed.
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": {"tags": []}})))
        .mount(&mock_server)
        .await;

    let analyzer = TagLens::builder()
        .base_url(mock_server.uri())
        .credential(Credential::basic("key", "secret"))
        .build()
        .unwrap();
    let tags = analyzer.tags(&taglens::ContentId::new("abc")).await.unwrap();
    assert!(tags.is_empty());
}
