pub mod args;
mod plain;
mod setup;

pub use args::AppArgs;

use std::io::{self, IsTerminal};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::content::Content;
use crate::engine::{Engine, EngineOptions};
use crate::logging::{LogBuffer, TerminalLogCollector};
use crate::ui::{run_tui, ScreenLog};

const LOG_CAPACITY: usize = 1000;

pub async fn launch() -> Result<()> {
    launch_with_args(AppArgs::from_cli()).await
}

pub async fn launch_with_args(args: AppArgs) -> Result<()> {
    let setup::PreparedApp {
        args,
        content,
        options,
        log_filter,
    } = setup::prepare(args)?;
    let filter = setup::env_filter(&log_filter)?;

    if args.dump_content {
        let json = serde_json::to_string_pretty(&content).context("failed to encode content")?;
        println!("{}", json);
        return Ok(());
    }

    if args.plain || !io::stdout().is_terminal() {
        setup::configure_plain_logging(filter);
        if !args.plain {
            info!("stdout is not a terminal, using plain mode");
        }
        return run_plain(content, options).await;
    }

    let log_buffer = Arc::new(LogBuffer::new(LOG_CAPACITY));
    TerminalLogCollector::init_subscriber(log_buffer.clone(), filter)
        .context("failed to install log collector")?;

    let engine = Engine::new(&content, ScreenLog::new(), &options);
    run_tui(engine, log_buffer).await
}

async fn run_plain(content: Content, options: EngineOptions) -> Result<()> {
    tokio::task::spawn_blocking(move || {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        let stdout = io::stdout();
        let color = stdout.is_terminal();

        let renderer = plain::AnsiRenderer::new(stdout, color).with_echo(!interactive);
        let mut engine = Engine::new(&content, renderer, &options);
        plain::run(&mut engine, stdin.lock(), interactive)
    })
    .await
    .context("plain mode task failed")?
}
