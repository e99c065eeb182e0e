//! HTTP transport for the Anthropic messages endpoint

use crate::buffer::ResponseBuffer;
use crate::{ClientConfig, Error, Result};
use log::debug;
use reqwest::StatusCode;
use std::time::{Duration, Instant};

pub const API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const API_VERSION: &str = "2023-06-01";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Perform exactly one POST with the serialized request body and return the
/// fully accumulated response body.
///
/// The body is collected chunk by chunk into a [`ResponseBuffer`]; a
/// transport failure mid-transfer surfaces as an error, never as a partial
/// body. No retries.
pub async fn post_completion(config: &ClientConfig, api_key: &str, body: String) -> Result<String> {
    let client = reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    if config.verbose {
        println!("POST {} (payload {} bytes)", API_URL, body.len());
    }
    debug!("Sending API request ({} bytes)", body.len());
    let started = Instant::now();

    let mut response = client
        .post(API_URL)
        .header("content-type", "application/json")
        .header("x-api-key", api_key)
        .header("anthropic-version", API_VERSION)
        .body(body)
        .send()
        .await?;

    let status = response.status();
    debug!("HTTP response code: {}", status.as_u16());

    let mut buffer = ResponseBuffer::new();
    while let Some(chunk) = response.chunk().await? {
        buffer.append(&chunk);
    }

    debug!(
        "API request completed in {} seconds",
        started.elapsed().as_secs()
    );

    finish_response(status, buffer)
}

/// Map the final status onto the accumulated body: 2xx hands the body to the
/// caller, anything else fails with the status code and the raw body kept
/// for diagnostics.
fn finish_response(status: StatusCode, buffer: ResponseBuffer) -> Result<String> {
    if status.is_success() {
        let body = buffer.into_text()?;
        debug!("API response received ({} bytes)", body.len());
        Ok(body)
    } else {
        Err(Error::HttpStatus {
            status: status.as_u16(),
            body: buffer.into_text_lossy(),
        })
    }
}
