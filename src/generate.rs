//! Optional external generation call. The completion text it returns is fed
//! to the tokenizer; a failure here is recoverable and must leave prior
//! inputs untouched, so this module only ever returns the fetched text.

use std::time::Duration;

use crate::error::GenerateError;

pub(crate) const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub(crate) const DEFAULT_GENERATION_MODEL: &str = "gpt-4.1-mini";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const TRANSPORT_RETRIES: usize = 3;
const RETRY_BACKOFF_MS: u64 = 250;

pub(crate) struct GenerateRequest<'a> {
    pub(crate) prompt: &'a str,
    pub(crate) api_key: &'a str,
    pub(crate) api_url: &'a str,
    pub(crate) model: &'a str,
}

/// Run the generation call and return the completion text. Transport errors
/// are retried with backoff; HTTP error statuses are not (a bad credential
/// does not get better by retrying).
pub(crate) fn fetch_completion(req: &GenerateRequest<'_>) -> Result<String, GenerateError> {
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(REQUEST_TIMEOUT))
        .build()
        .into();

    let payload = serde_json::json!({
        "model": req.model,
        "messages": [{ "role": "user", "content": req.prompt }],
    });

    let auth = format!("Bearer {}", req.api_key);
    let mut last_error = GenerateError::Http("no attempt made".to_string());
    for attempt in 0..TRANSPORT_RETRIES {
        match agent
            .post(req.api_url)
            .header("Authorization", auth.as_str())
            .send_json(&payload)
        {
            Ok(response) => {
                let mut body = response.into_body();
                let parsed: serde_json::Value = serde_json::from_reader(body.as_reader())
                    .map_err(|e| GenerateError::Malformed(e.to_string()))?;
                return extract_content(&parsed);
            }
            Err(ureq::Error::StatusCode(code)) => return Err(GenerateError::Status(code)),
            Err(e) => last_error = GenerateError::Http(e.to_string()),
        }

        if attempt + 1 < TRANSPORT_RETRIES {
            std::thread::sleep(Duration::from_millis(RETRY_BACKOFF_MS * (attempt as u64 + 1)));
        }
    }

    Err(last_error)
}

fn extract_content(body: &serde_json::Value) -> Result<String, GenerateError> {
    body.get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            GenerateError::Malformed("missing choices[0].message.content".to_string())
        })
}
