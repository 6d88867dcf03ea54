use crate::cli::Cli;
use crate::commands;
use crate::context::{AppContext, resolve_config_dir};
use crate::error::FywError;
use crate::logger::initialize as LoggerInitialize;

use std::io::Write;

use log::info;
use tokio::io::AsyncBufRead;

/// Resolve the config directory, start logging, load context, run the command.
pub async fn run<R, W>(cli: Cli, input: R, out: &mut W) -> Result<(), FywError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let config_dir = resolve_config_dir(cli.config_dir)?;

    // Initialize logger FIRST
    LoggerInitialize(&config_dir, cli.verbose)?;
    info!("Config directory: {}", config_dir.display());

    let mut ctx = AppContext::load(&config_dir, cli.api_base_url.as_deref())?;

    commands::dispatch(&mut ctx, cli.command, input, out).await
}
