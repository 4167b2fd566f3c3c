use std::fs;
use std::io::Read;
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::consts::{DEBOUNCE_DELAY, VOCABULARY};
use crate::core::{Debouncer, UnitMode, UsageInput, compute_costs, parse_quantity};
use crate::error::{AppError, GenerateError};
use crate::generate::{
    DEFAULT_API_URL, DEFAULT_GENERATION_MODEL, GenerateRequest, fetch_completion,
};
use crate::output::{
    CostTableOptions, output_count_json, output_models_json, output_records_json,
    print_cost_table, print_models_table,
};
use crate::pricing::PriceTable;
use crate::state::{self, SavedState};
use crate::tokenizer;

const WATCH_POLL_INTERVAL: Duration = Duration::from_millis(50);

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) config: &'a Config,
    pub(crate) prices: &'a PriceTable,
}

pub(crate) fn run(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    match &ctx.cli.command {
        None | Some(Commands::Estimate) => handle_estimate(ctx),
        Some(Commands::Count { text, file, watch }) => {
            handle_count(ctx, text.as_deref(), file.as_deref(), *watch)
        }
        Some(Commands::Generate {
            prompt,
            api_key,
            save_key,
        }) => handle_generate(ctx, prompt.as_deref(), api_key.as_deref(), *save_key),
        Some(Commands::Models) => {
            handle_models(ctx);
            Ok(())
        }
    }
}

/// An invalid edit keeps the prior valid value; this is a local recovery,
/// never a hard failure.
fn resolve_quantity(raw: Option<&str>, prev: f64, label: &str) -> f64 {
    let Some(raw) = raw else {
        return prev;
    };
    match parse_quantity(raw) {
        Some(value) => value,
        None => {
            eprintln!("Warning: invalid {label} quantity {raw:?}, keeping {prev}");
            prev
        }
    }
}

/// Combine CLI flags with the persisted last-used values; absent flags fall
/// back to the saved input, which is already sanitized by `state::load`.
fn resolve_usage(cli: &Cli, saved: &SavedState) -> UsageInput {
    let prev = saved.usage;
    UsageInput {
        input_quantity: resolve_quantity(cli.input.as_deref(), prev.input_quantity, "input"),
        output_quantity: resolve_quantity(cli.output.as_deref(), prev.output_quantity, "output"),
        call_count: cli.calls.unwrap_or(prev.call_count).max(1),
        unit_mode: cli.mode.unwrap_or(prev.unit_mode),
    }
}

fn render_estimate(ctx: &CommandContext<'_>, usage: &UsageInput) {
    let records = compute_costs(usage, ctx.prices.entries());
    let sort = ctx.cli.sort_state();
    if ctx.cli.json {
        println!("{}", output_records_json(&records, usage, sort));
    } else {
        print_cost_table(
            &records,
            usage,
            CostTableOptions {
                sort,
                use_color: ctx.cli.use_color(),
            },
        );
    }
}

fn handle_estimate(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let mut saved = state::load();
    let usage = resolve_usage(ctx.cli, &saved);
    render_estimate(ctx, &usage);
    if !ctx.cli.no_save {
        saved.usage = usage;
        state::save(&saved);
    }
    Ok(())
}

fn handle_count(
    ctx: &CommandContext<'_>,
    text: Option<&str>,
    file: Option<&Path>,
    watch: bool,
) -> Result<(), AppError> {
    if watch {
        // clap guarantees --watch comes with --file
        let Some(path) = file else {
            unreachable!("--watch requires --file");
        };
        return watch_file(path);
    }

    let text = match (text, file) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => fs::read_to_string(path).map_err(|source| AppError::ReadInput {
            path: path.display().to_string(),
            source,
        })?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| AppError::ReadInput {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            buf
        }
    };

    let tokens = tokenizer::count(&text)?;
    if ctx.cli.json {
        println!("{}", output_count_json(tokens, VOCABULARY));
    } else {
        println!("{tokens}");
    }
    Ok(())
}

/// Re-count a file whenever it changes. Rapid edits are debounced so only
/// the most recent change triggers an encode.
fn watch_file(path: &Path) -> Result<(), AppError> {
    tokenizer::ensure_ready()?;
    eprintln!("Watching {} (Ctrl-C to stop)", path.display());

    let debouncer = Debouncer::new();
    let mut last_modified: Option<std::time::SystemTime> = None;
    loop {
        match fs::metadata(path).and_then(|meta| meta.modified()) {
            Ok(modified) if last_modified != Some(modified) => {
                last_modified = Some(modified);
                let path = path.to_path_buf();
                debouncer.schedule(DEBOUNCE_DELAY, move || {
                    match fs::read_to_string(&path) {
                        Ok(text) => match tokenizer::count(&text) {
                            Ok(tokens) => println!("{}: {tokens} tokens", path.display()),
                            Err(e) => eprintln!("{e}"),
                        },
                        Err(e) => eprintln!("Failed to read {}: {e}", path.display()),
                    }
                });
            }
            Ok(_) => {}
            Err(_) => {
                // File gone; drop any pending count until it reappears.
                if last_modified.take().is_some() {
                    debouncer.cancel();
                    eprintln!("{} removed, waiting for it to return", path.display());
                }
            }
        }
        thread::sleep(WATCH_POLL_INTERVAL);
    }
}

fn handle_generate(
    ctx: &CommandContext<'_>,
    prompt: Option<&str>,
    api_key: Option<&str>,
    save_key: bool,
) -> Result<(), AppError> {
    let mut saved = state::load();

    let prompt = prompt
        .map(str::to_string)
        .or_else(|| saved.last_prompt.clone())
        .ok_or(GenerateError::MissingPrompt)?;
    let key = api_key
        .map(str::to_string)
        .or_else(|| saved.api_key.clone())
        .or_else(|| std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()))
        .ok_or(GenerateError::MissingKey)?;

    let api_url = ctx.config.api_url.as_deref().unwrap_or(DEFAULT_API_URL);
    let model = ctx
        .config
        .generation_model
        .as_deref()
        .unwrap_or(DEFAULT_GENERATION_MODEL);

    // A failed fetch returns here: saved state and prior inputs stay intact.
    let completion = fetch_completion(&GenerateRequest {
        prompt: &prompt,
        api_key: &key,
        api_url,
        model,
    })?;

    let input_tokens = tokenizer::count(&prompt)?;
    let output_tokens = tokenizer::count(&completion)?;

    let usage = UsageInput {
        input_quantity: input_tokens as f64,
        output_quantity: output_tokens as f64,
        call_count: ctx.cli.calls.unwrap_or(1).max(1),
        unit_mode: UnitMode::Tokens,
    };

    if !ctx.cli.json {
        eprintln!("Measured {input_tokens} prompt / {output_tokens} completion tokens ({VOCABULARY})");
    }
    render_estimate(ctx, &usage);

    if !ctx.cli.no_save {
        saved.usage = usage;
        saved.last_prompt = Some(prompt);
        if save_key {
            saved.api_key = Some(key);
        }
        state::save(&saved);
    }
    Ok(())
}

fn handle_models(ctx: &CommandContext<'_>) {
    if ctx.cli.json {
        println!("{}", output_models_json(ctx.prices.entries()));
    } else {
        print_models_table(ctx.prices.entries(), ctx.cli.use_color());
    }
}
