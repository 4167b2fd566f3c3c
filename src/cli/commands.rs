//! CLI subcommand definitions

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Estimate per-model costs from the given quantities (default)
    Estimate,
    /// Count exact tokens in text, a file, or stdin
    Count {
        /// Text to count (reads stdin when neither TEXT nor --file is given)
        text: Option<String>,
        /// Read the text from a file
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
        /// Re-count the file whenever it changes (debounced)
        #[arg(short, long, requires = "file")]
        watch: bool,
    },
    /// Call the generation API, measure the real prompt/completion tokens,
    /// and estimate from those counts
    Generate {
        /// Prompt to send (falls back to the last saved prompt)
        #[arg(short, long)]
        prompt: Option<String>,
        /// API key (falls back to the saved key, then OPENAI_API_KEY)
        #[arg(short = 'k', long, value_name = "KEY")]
        api_key: Option<String>,
        /// Persist the API key for later runs
        #[arg(long)]
        save_key: bool,
    },
    /// List the price table
    Models,
}
