//! Exact token counting through the tiktoken BPE collaborator.
//!
//! A single fixed vocabulary (`o200k_base`, the GPT-4o/4.1 family encoding)
//! is used for every count in a session. Counts from different vocabularies
//! are not comparable, so the encoder is process-global and loaded once.

use std::sync::OnceLock;

use tiktoken_rs::CoreBPE;

use crate::consts::VOCABULARY;
use crate::error::AppError;

static ENCODER: OnceLock<Option<CoreBPE>> = OnceLock::new();

fn encoder() -> Result<&'static CoreBPE, AppError> {
    ENCODER
        .get_or_init(|| tiktoken_rs::o200k_base().ok())
        .as_ref()
        .ok_or(AppError::TokenizerUnavailable(VOCABULARY))
}

/// Force encoder initialization. Counting initializes lazily; callers that
/// loop (watch mode) use this to fail before entering the loop.
pub(crate) fn ensure_ready() -> Result<(), AppError> {
    encoder().map(|_| ())
}

/// Exact token count for arbitrary text. Whitespace-only text counts as
/// empty. An unavailable tokenizer is an error, never a count of zero —
/// zero means "empty text", not "unknown".
pub(crate) fn count(text: &str) -> Result<usize, AppError> {
    let encoder = encoder()?;
    if text.trim().is_empty() {
        return Ok(0);
    }
    Ok(encoder.encode_ordinary(text).len())
}
