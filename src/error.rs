use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Tokenizer unavailable: failed to load the {0} vocabulary")]
    TokenizerUnavailable(&'static str),

    #[error("Failed to read {path}: {source}")]
    ReadInput {
        path: String,
        source: std::io::Error,
    },

    #[error("{0}")]
    Generate(#[from] GenerateError),
}

#[derive(Debug, Error)]
pub(crate) enum GenerateError {
    #[error("No prompt given. Pass --prompt, or reuse the last saved prompt after a successful run.")]
    MissingPrompt,

    #[error("No API key. Pass --api-key, set OPENAI_API_KEY, or save one with --save-key.")]
    MissingKey,

    #[error("Generation request failed: {0}")]
    Http(String),

    #[error("Generation API returned status {0}")]
    Status(u16),

    #[error("Malformed generation response: {0}")]
    Malformed(String),
}
