//! folio-term: a portfolio presented as an interactive command line.
mod app;
mod content;
mod engine;
mod logging;
mod markup;
mod ui;

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    app::launch().await
}
