use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "folio-term")]
#[command(about = "An interactive terminal-style portfolio")]
pub struct AppArgs {
    #[arg(
        long,
        help = "Read commands line by line from stdin instead of running the full-screen UI"
    )]
    pub plain: bool,

    #[arg(
        long,
        value_name = "PATH",
        help = "JSON file overriding the built-in content (or set FOLIO_CONTENT)"
    )]
    pub content: Option<PathBuf>,

    #[arg(long, help = "Skip the startup banner")]
    pub no_banner: bool,

    #[arg(
        long = "log-level",
        value_name = "FILTER",
        help = "Log filter, e.g. `debug` or `folio_term=trace` (or set RUST_LOG)"
    )]
    pub log_level: Option<String>,

    #[arg(long, help = "Print the effective content as JSON and exit")]
    pub dump_content: bool,
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }
}
