//! Upload progress reporting.
//!
//! The multipart body is streamed in fixed-size chunks; [`ProgressStream`]
//! wraps the chunk stream and reports bytes-sent over bytes-total as each
//! chunk is pulled by the transport. Reported fractions are clamped to
//! [0.0, 1.0] and guarded monotone, reaching 1.0 with the final chunk.

use std::convert::Infallible;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures_util::Stream;
use pin_project_lite::pin_project;

/// Callback receiving fractional upload progress in [0.0, 1.0].
pub type ProgressFn = Arc<dyn Fn(f32) + Send + Sync>;

/// Progress callback that discards every event.
pub fn noop() -> ProgressFn {
    Arc::new(|_| {})
}

/// Chunk size for the streamed upload body.
const CHUNK_SIZE: usize = 64 * 1024;

/// Split image bytes into transmission chunks.
///
/// Slices share the underlying buffer; no copies are made.
pub fn chunked(bytes: Bytes) -> impl Iterator<Item = std::result::Result<Bytes, Infallible>> {
    let mut offset = 0;
    std::iter::from_fn(move || {
        if offset >= bytes.len() {
            return None;
        }
        let end = (offset + CHUNK_SIZE).min(bytes.len());
        let chunk = bytes.slice(offset..end);
        offset = end;
        Some(Ok(chunk))
    })
}

pin_project! {
    /// Stream adapter that counts transmitted bytes and drives the
    /// progress callback.
    pub struct ProgressStream<S> {
        #[pin]
        inner: S,
        sent: u64,
        total: u64,
        last: f32,
        on_progress: ProgressFn,
    }
}

impl<S> ProgressStream<S> {
    pub fn wrap(inner: S, total: u64, on_progress: ProgressFn) -> Self {
        Self {
            inner,
            sent: 0,
            total,
            last: 0.0,
            on_progress,
        }
    }
}

impl<S, E> Stream for ProgressStream<S>
where
    S: Stream<Item = std::result::Result<Bytes, E>>,
{
    type Item = std::result::Result<Bytes, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        let polled = this.inner.poll_next(cx);
        if let Poll::Ready(Some(Ok(chunk))) = &polled {
            *this.sent += chunk.len() as u64;
            let fraction = if *this.total == 0 {
                1.0
            } else {
                (*this.sent as f32 / *this.total as f32).clamp(0.0, 1.0)
            };
            // Float rounding must never make progress run backwards.
            if fraction >= *this.last {
                *this.last = fraction;
                (this.on_progress)(fraction);
            }
        }
        polled
    }
}
