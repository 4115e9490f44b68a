//! HTTP client for the image analysis API.
//!
//! One instance serves any number of sequential analyze calls; the
//! orchestration itself lives in the [`ImageAnalysis`] default method.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use futures_util::stream;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info, warn};

use crate::progress::{self, ProgressFn, ProgressStream};
use crate::reachability::Reachability;
use crate::router::{ApiRoute, Router};
use crate::telemetry;
use crate::traits::ImageAnalysis;
use crate::types::{ContentId, PhotoColor, UploadRequest};
use crate::{Result, TagLensError, parse};

/// Field name of the binary part in the upload form.
const UPLOAD_FIELD: &str = "image";

/// Client for the image analysis API.
///
/// Owns the HTTP client (uniform per-request timeout), the request
/// router, and the injected reachability probe.
pub struct ImageAnalyzer {
    http: Client,
    router: Router,
    reachability: Arc<dyn Reachability>,
}

impl ImageAnalyzer {
    pub(crate) fn new(
        router: Router,
        timeout: Duration,
        reachability: Arc<dyn Reachability>,
    ) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            router,
            reachability,
        }
    }

    /// GET a route and hand back the raw response body.
    async fn get(&self, route: ApiRoute<'_>) -> Result<String> {
        let url = self.router.url(&route)?;
        let started = Instant::now();
        let outcome = async {
            let response = self
                .http
                .get(url)
                .header(AUTHORIZATION, self.router.credential().header_value())
                .send()
                .await
                .map_err(|e| TagLensError::Http(e.to_string()))?;
            handle_response_errors(&response)?;
            response
                .text()
                .await
                .map_err(|e| TagLensError::Http(e.to_string()))
        }
        .await;
        record(route.operation(), started, outcome.is_ok());
        outcome
    }
}

#[async_trait]
impl ImageAnalysis for ImageAnalyzer {
    async fn upload(&self, request: UploadRequest, on_progress: ProgressFn) -> Result<ContentId> {
        if !self.reachability.is_reachable() {
            warn!("network reported unreachable, attempting upload anyway");
        }

        let route = ApiRoute::Upload;
        let url = self.router.url(&route)?;
        let total = request.len() as u64;

        // Stream the body in chunks so progress tracks actual transmission.
        let body_stream = ProgressStream::wrap(
            stream::iter(progress::chunked(request.bytes().clone())),
            total,
            on_progress,
        );
        let part = Part::stream_with_length(reqwest::Body::wrap_stream(body_stream), total)
            .file_name(request.file_name().to_string())
            .mime_str(request.format().mime())
            .map_err(|e| TagLensError::Http(e.to_string()))?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let started = Instant::now();
        let outcome = async {
            let response = self
                .http
                .post(url)
                .header(AUTHORIZATION, self.router.credential().header_value())
                .multipart(form)
                .send()
                .await
                .map_err(|e| TagLensError::Http(e.to_string()))?;
            handle_response_errors(&response)?;
            let body = response
                .text()
                .await
                .map_err(|e| TagLensError::Http(e.to_string()))?;
            parse::upload_id(&body)?.ok_or(TagLensError::MissingUploadId)
        }
        .await;
        record(route.operation(), started, outcome.is_ok());

        if let Ok(id) = &outcome {
            metrics::counter!(telemetry::UPLOAD_BYTES_TOTAL).increment(total);
            info!(upload_id = %id, bytes = total, "image uploaded");
        }
        outcome
    }

    async fn tags(&self, upload_id: &ContentId) -> Result<Vec<String>> {
        let body = self
            .get(ApiRoute::Tags {
                upload_id: upload_id.as_str(),
            })
            .await?;
        let tags = parse::tags(&body)?;
        debug!(upload_id = %upload_id, count = tags.len(), "tags received");
        Ok(tags)
    }

    async fn colors(&self, upload_id: &ContentId) -> Result<Vec<PhotoColor>> {
        let body = self
            .get(ApiRoute::Colors {
                upload_id: upload_id.as_str(),
            })
            .await?;
        let colors = parse::colors(&body)?;
        debug!(upload_id = %upload_id, count = colors.len(), "colors received");
        Ok(colors)
    }
}

/// Check response status and map to the appropriate error.
fn handle_response_errors(response: &reqwest::Response) -> Result<()> {
    let status = response.status();

    if status.is_success() {
        return Ok(());
    }

    match status.as_u16() {
        401 => Err(TagLensError::AuthenticationFailed),
        429 => {
            // Try to parse retry-after header
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs);
            Err(TagLensError::RateLimited { retry_after })
        }
        code => Err(TagLensError::Api {
            status: code,
            message: format!("image analysis API error: {status}"),
        }),
    }
}

/// Record request count and duration for one API call.
fn record(operation: &'static str, started: Instant, ok: bool) {
    let status = if ok { "ok" } else { "error" };
    metrics::counter!(
        telemetry::REQUESTS_TOTAL,
        "operation" => operation,
        "status" => status,
    )
    .increment(1);
    metrics::histogram!(
        telemetry::REQUEST_DURATION_SECONDS,
        "operation" => operation,
    )
    .record(started.elapsed().as_secs_f64());
}
