//! HTTP client for the Gemini `generateContent` endpoint.
//!
//! Answers are short (~100 words) so requests block synchronously; callers
//! that must not stall run [`AdvisorClient::advise`] on a worker thread.

use std::time::Duration;

use crate::error::{AdvisorError, Result};

const DEFAULT_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";
const REQUEST_TIMEOUT_SECS: u64 = 30;
const MAX_RETRIES: usize = 3;
const RETRY_BASE_DELAY_MS: u64 = 500;

const SYSTEM_INSTRUCTION: &str = "You are a professional fire safety instructor. \
Your goal is to give expert advice on fire safety, extinguisher operation \
(the PASS method) and fire emergency response.\n\
Requirements:\n\
1. Keep answers concise and direct, suitable for a phone screen (under 100 words).\n\
2. Use a professional, calm, reassuring tone.\n\
3. When asked about operating steps, stress the sequence: Pull the pin, \
Aim at the base of the fire, Squeeze the handle, Sweep side to side.";

/// Returned to the operator when the service itself replied but with no text.
const FALLBACK_OFFLINE: &str = "Safety system offline. Please consult the printed manual.";
/// Returned to the operator on any request failure.
const FALLBACK_CONNECTION: &str = "Connection error. Please check your network.";

/// Client for the safety advisor chat.
pub struct AdvisorClient {
    api_key: String,
    api_url: String,
}

impl AdvisorClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Read the API key from `FIREDRILL_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("FIREDRILL_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(AdvisorError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }

    /// Override the endpoint, for proxies and tests.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Ask the advisor a question, propagating failures.
    pub fn ask(&self, question: &str) -> Result<String> {
        let payload = build_request_body(question);
        let response = self.post_json_with_retry(&payload)?;
        extract_answer(&response)
    }

    /// Ask the advisor a question, never failing: errors become fixed
    /// offline guidance so the trainer keeps working without a network.
    pub fn advise(&self, question: &str) -> String {
        match self.ask(question) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "advisor request failed");
                fallback_for(&err).to_string()
            }
        }
    }

    fn post_json_with_retry(&self, payload: &serde_json::Value) -> Result<serde_json::Value> {
        let mut attempt = 0;
        loop {
            let agent = build_agent();
            let response = agent
                .post(&self.api_url)
                .header("x-goog-api-key", &self.api_key)
                .header("Content-Type", "application/json")
                .send_json(payload);

            match response {
                Ok(mut ok) => {
                    return ok.body_mut().read_json().map_err(|e| {
                        AdvisorError::MalformedResponse(format!("invalid JSON body: {e}"))
                    });
                }
                Err(e) => {
                    if attempt + 1 < MAX_RETRIES && is_retryable_error(&e) {
                        tracing::debug!(error = %e, attempt, "retrying advisor request");
                        sleep_backoff(attempt);
                        attempt += 1;
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }
    }
}

/// Build the `generateContent` request body for a single-turn question.
pub fn build_request_body(question: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [{
            "parts": [{ "text": question }]
        }],
        "systemInstruction": {
            "parts": [{ "text": SYSTEM_INSTRUCTION }]
        },
        "generationConfig": {
            "temperature": 0.3
        }
    })
}

/// Pull the answer text out of a `generateContent` response.
fn extract_answer(response: &serde_json::Value) -> Result<String> {
    response
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|arr| arr.first())
        .and_then(|cand| cand.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.as_array())
        .and_then(|arr| arr.first())
        .and_then(|part| part.get("text"))
        .and_then(|t| t.as_str())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            AdvisorError::MalformedResponse(format!(
                "no answer text in response: {}",
                serde_json::to_string(response).unwrap_or_default()
            ))
        })
}

/// Fixed guidance shown in place of a failed advisor call. A service that
/// answered with an unusable body is "offline"; everything else reads as a
/// connection problem.
fn fallback_for(err: &AdvisorError) -> &'static str {
    match err {
        AdvisorError::MalformedResponse(_) => FALLBACK_OFFLINE,
        _ => FALLBACK_CONNECTION,
    }
}

fn build_agent() -> ureq::Agent {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .build();
    config.into()
}

fn is_retryable_error(e: &ureq::Error) -> bool {
    match e {
        ureq::Error::Timeout(_)
        | ureq::Error::Io(_)
        | ureq::Error::ConnectionFailed
        | ureq::Error::HostNotFound => true,
        ureq::Error::StatusCode(code) => matches!(code, 429 | 500 | 502 | 503 | 504),
        _ => false,
    }
}

fn sleep_backoff(attempt: usize) {
    let delay_ms = RETRY_BASE_DELAY_MS.saturating_mul(1u64 << attempt);
    std::thread::sleep(Duration::from_millis(delay_ms));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = build_request_body("How do I use a CO2 extinguisher?");
        assert_eq!(
            body["contents"][0]["parts"][0]["text"],
            "How do I use a CO2 extinguisher?"
        );
        assert_eq!(body["generationConfig"]["temperature"], 0.3);
        let instruction = body["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap();
        assert!(instruction.contains("Squeeze"));
    }

    #[test]
    fn test_extract_answer() {
        let response = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "  Aim at the base of the fire.  " }],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        });
        let text = extract_answer(&response).unwrap();
        assert_eq!(text, "Aim at the base of the fire.");
    }

    #[test]
    fn test_extract_answer_rejects_empty() {
        let response = serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "" }] } }]
        });
        assert!(matches!(
            extract_answer(&response),
            Err(AdvisorError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_extract_answer_rejects_error_body() {
        let response = serde_json::json!({
            "error": { "code": 400, "message": "API key not valid" }
        });
        assert!(extract_answer(&response).is_err());
    }

    #[test]
    fn test_fallback_mapping() {
        let malformed = AdvisorError::MalformedResponse("no answer text".to_string());
        assert_eq!(fallback_for(&malformed), FALLBACK_OFFLINE);

        let status = AdvisorError::Transport(ureq::Error::StatusCode(503));
        assert_eq!(fallback_for(&status), FALLBACK_CONNECTION);

        assert_eq!(fallback_for(&AdvisorError::MissingApiKey), FALLBACK_CONNECTION);
    }

    #[test]
    fn test_advise_degrades_to_connection_fallback() {
        // Nothing listens on the discard port; the request fails without
        // leaving the machine and advise must answer anyway.
        let client = AdvisorClient::new("test-key").with_api_url("http://127.0.0.1:9/v1/chat");
        let answer = client.advise("How do I hold the nozzle?");
        assert_eq!(answer, FALLBACK_CONNECTION);
    }

    #[test]
    fn test_from_env_requires_key() {
        // Runs with the variable unset in CI; a set-but-empty value must
        // also be rejected.
        std::env::remove_var("FIREDRILL_API_KEY");
        assert!(matches!(
            AdvisorClient::from_env(),
            Err(AdvisorError::MissingApiKey)
        ));
    }
}
