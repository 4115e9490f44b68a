//! Request routing for the image analysis API.
//!
//! The service contract is three operations over a fixed base URL, each
//! with its own method, path, and parameters, all carrying a static
//! authorization header. The router turns an [`ApiRoute`] into a
//! fully-formed target URL; the HTTP client attaches the header and body.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::{Method, Url};

use crate::{Result, TagLensError};

/// Default base URL for the image analysis API.
pub const DEFAULT_BASE_URL: &str = "https://api.imagga.com/v2";

/// Query parameter correlating follow-up calls to an upload.
const UPLOAD_ID_PARAM: &str = "image_upload_id";

/// Static authorization credential sent with every request.
#[derive(Clone)]
pub struct Credential {
    header_value: String,
}

impl Credential {
    /// HTTP Basic credentials from an API key/secret pair.
    pub fn basic(api_key: &str, api_secret: &str) -> Self {
        let token = BASE64.encode(format!("{api_key}:{api_secret}"));
        Self {
            header_value: format!("Basic {token}"),
        }
    }

    /// Bearer token credential.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            header_value: format!("Bearer {}", token.into()),
        }
    }

    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> &str {
        &self.header_value
    }
}

/// One of the three API operations.
#[derive(Debug, Clone)]
pub enum ApiRoute<'a> {
    /// POST an image as a multipart body.
    Upload,
    /// Fetch tags for an uploaded image.
    Tags { upload_id: &'a str },
    /// Fetch dominant colors for an uploaded image.
    Colors { upload_id: &'a str },
}

impl ApiRoute<'_> {
    pub fn method(&self) -> Method {
        match self {
            ApiRoute::Upload => Method::POST,
            ApiRoute::Tags { .. } | ApiRoute::Colors { .. } => Method::GET,
        }
    }

    /// Path segment under the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            ApiRoute::Upload => "uploads",
            ApiRoute::Tags { .. } => "tags",
            ApiRoute::Colors { .. } => "colors",
        }
    }

    /// Metric/log label for the operation.
    pub fn operation(&self) -> &'static str {
        match self {
            ApiRoute::Upload => "upload",
            ApiRoute::Tags { .. } => "tags",
            ApiRoute::Colors { .. } => "colors",
        }
    }

    /// Query parameters for the operation.
    ///
    /// The colors route pins `extract_object_colors=0`: only whole-image
    /// colors are requested, never per-object ones.
    fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        match self {
            ApiRoute::Upload => Vec::new(),
            ApiRoute::Tags { upload_id } => vec![(UPLOAD_ID_PARAM, *upload_id)],
            ApiRoute::Colors { upload_id } => vec![
                (UPLOAD_ID_PARAM, *upload_id),
                ("extract_object_colors", "0"),
            ],
        }
    }
}

/// Builds fully-formed request targets for the API operations.
pub struct Router {
    base: Url,
    credential: Credential,
}

impl Router {
    /// Parse and normalize the base URL.
    ///
    /// A malformed base URL fails here, before any network call.
    pub fn new(base_url: &str, credential: Credential) -> Result<Self> {
        let mut base = Url::parse(base_url).map_err(|e| {
            TagLensError::Configuration(format!("invalid base URL {base_url:?}: {e}"))
        })?;
        if base.cannot_be_a_base() {
            return Err(TagLensError::Configuration(format!(
                "invalid base URL {base_url:?}: cannot serve as a base"
            )));
        }
        // `Url::join` drops the last path segment unless it ends in a slash.
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        Ok(Self { base, credential })
    }

    /// Absolute URL for a route, query parameters encoded.
    pub fn url(&self, route: &ApiRoute<'_>) -> Result<Url> {
        let mut url = self.base.join(route.path()).map_err(|e| {
            TagLensError::Configuration(format!("cannot build URL for {}: {e}", route.path()))
        })?;
        let pairs = route.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }
}
