//! HTTP fetching.
//!
//! Every network read in the scanner goes through [`fetch_document`], which
//! returns the status, post-redirect URL, headers and body of a response.
//! Non-OK statuses are returned as documents; only transport failures
//! become a [`FetchError`].

mod context;
mod request;

pub use context::ScanContext;

use futures::StreamExt;
use log::debug;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::FetchError;
use request::RequestHeaders;

/// A fetched HTTP response.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub status: StatusCode,
    /// URL after following redirects.
    pub final_url: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl FetchedDocument {
    /// True for exactly `200 OK`.
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }
}

/// Fetches `url` with the shared client, following redirects.
///
/// # Errors
///
/// - `FetchError::InvalidUrl` if `url` does not parse
/// - `FetchError::Request` on timeout, DNS, connection or body read failure
/// - `FetchError::BodyTooLarge` if the body exceeds `MAX_RESPONSE_BODY_SIZE`
pub async fn fetch_document(
    client: &reqwest::Client,
    url: &str,
) -> Result<FetchedDocument, FetchError> {
    fetch_document_with_limit(client, url, MAX_RESPONSE_BODY_SIZE).await
}

async fn fetch_document_with_limit(
    client: &reqwest::Client,
    url: &str,
    max_size: usize,
) -> Result<FetchedDocument, FetchError> {
    let parsed = url::Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let request_error = |source: reqwest::Error| FetchError::Request {
        url: url.to_string(),
        source,
    };
    let too_large = || FetchError::BodyTooLarge {
        url: url.to_string(),
        limit: max_size,
    };

    let response = RequestHeaders::apply_to_request_builder(client.get(parsed))
        .send()
        .await
        .map_err(request_error)?;

    if response
        .content_length()
        .is_some_and(|len| len > max_size as u64)
    {
        return Err(too_large());
    }

    let status = response.status();
    let final_url = response.url().to_string();
    let headers = response.headers().clone();

    // Content-Length may be absent or wrong, so the cap is also enforced per chunk
    let mut stream = response.bytes_stream();
    let mut buf = Vec::with_capacity(max_size.min(64 * 1024));
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(request_error)?;
        if buf.len() + chunk.len() > max_size {
            debug!(
                "Aborting {} at {} bytes (limit {})",
                url,
                buf.len() + chunk.len(),
                max_size
            );
            return Err(too_large());
        }
        buf.extend_from_slice(&chunk);
    }
    let body = String::from_utf8_lossy(&buf).into_owned();

    debug!(
        "GET {} -> {} ({} bytes, final URL {})",
        url,
        status.as_u16(),
        body.len(),
        final_url
    );

    Ok(FetchedDocument {
        status,
        final_url,
        headers,
        body,
    })
}
