//! Command dispatch.

pub mod config;
pub mod copy;
pub mod generate;
pub mod inspect;
pub mod showcase;

use anyhow::Result;
use tokio_util::sync::CancellationToken;

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli, cancel: CancellationToken) -> Result<()> {
    match cli.command {
        Command::Generate(args) => generate::handle(args, cancel).await,
        Command::Inspect { colors } => inspect::handle(&colors),
        Command::Copy { color, format } => copy::handle(&color, format).await,
        Command::Showcase { palette, svg } => showcase::handle(&palette, &svg),
        Command::Config { action } => config::handle(action),
    }
}
