//! CLI entry point for chroma.

mod cli;
mod clipboard;
mod commands;
mod config;
mod output;
mod render;

use clap::Parser;
use chroma_observability::ObservabilityConfig;
use tokio_util::sync::CancellationToken;

use crate::cli::Cli;

fn init_tracing(verbose: bool) {
    let mut config = ObservabilityConfig::from_env().with_version(env!("CARGO_PKG_VERSION"));
    if verbose {
        config = config.with_log_level("chroma_llms=debug,chroma_view=debug,chroma_cli=debug,warn");
    }
    if let Err(e) = chroma_observability::init(config) {
        output::warning(&format!("Logging disabled: {e}"));
    }
}

#[tokio::main]
async fn main() {
    config::load_env_files();
    let cli = Cli::parse();
    output::init(cli.output);
    init_tracing(cli.verbose);

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let result = commands::handle(cli, cancel).await;
    chroma_observability::shutdown();

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
