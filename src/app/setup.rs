//! Resolves command-line flags and the environment into a runnable
//! configuration.
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use super::args::AppArgs;
use crate::content::Content;
use crate::engine::EngineOptions;

/// Captured logs are only visible in the log view, so the full-screen UI can
/// afford to record debug output.
const DEFAULT_TUI_FILTER: &str = "info,folio_term=debug";
/// Plain mode logs to stderr next to the command output.
const DEFAULT_PLAIN_FILTER: &str = "error";

pub struct PreparedApp {
    pub args: AppArgs,
    pub content: Content,
    pub options: EngineOptions,
    /// `tracing` filter directives.
    pub log_filter: String,
}

pub fn prepare(args: AppArgs) -> Result<PreparedApp> {
    let content_path = resolve_content_path(args.content.clone(), std::env::var_os("FOLIO_CONTENT"));
    let content = load_content(content_path.as_deref())?;

    let log_filter = resolve_log_filter(
        args.log_level.clone(),
        std::env::var("RUST_LOG").ok(),
        args.plain,
    );

    let options = EngineOptions {
        quiet: args.no_banner,
    };

    Ok(PreparedApp {
        args,
        content,
        options,
        log_filter,
    })
}

/// Parses filter directives, reporting which ones were rejected.
pub fn env_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .with_context(|| format!("invalid log filter '{}'", directives))
}

/// Sends logs to stderr for plain mode.
pub fn configure_plain_logging(filter: EnvFilter) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_content_path(flag: Option<PathBuf>, env: Option<OsString>) -> Option<PathBuf> {
    flag.or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
}

fn load_content(path: Option<&Path>) -> Result<Content> {
    match path {
        Some(path) => Content::load(path).context("could not load portfolio content"),
        None => Ok(Content::builtin()),
    }
}

fn resolve_log_filter(flag: Option<String>, env: Option<String>, plain: bool) -> String {
    flag.or_else(|| env.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| {
            if plain {
                DEFAULT_PLAIN_FILTER
            } else {
                DEFAULT_TUI_FILTER
            }
            .to_string()
        })
}
