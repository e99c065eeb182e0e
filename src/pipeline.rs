//! Orchestration of one review: build the request, perform the API call,
//! parse the completion.

use crate::client::post_completion;
use crate::parser::{parse_response, ReviewSummary};
use crate::request::build_request_body;
use crate::{ClientConfig, Result};

/// Run the Build → Transport → Parse sequence once. Each step starts only
/// after the previous one completed; the first failure aborts the run.
pub async fn run_review(
    config: &ClientConfig,
    api_key: &str,
    profile: &str,
    diff: &str,
) -> Result<ReviewSummary> {
    let body = build_request_body(config, profile, diff)?;
    let response = post_completion(config, api_key, body).await?;
    parse_response(&response)
}
