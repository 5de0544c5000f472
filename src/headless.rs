// Headless mode - one fetch, printed to stdout
//
// Used by `jokebox fetch` and when JOKEBOX_NO_TUI=1. Logs go to stderr so
// stdout carries only jokes.

use crate::models::{Category, Joke};
use crate::services::{JokeService, Service, ServiceLocator};
use anyhow::{bail, Context, Result};
use futures::StreamExt;
use std::io::Write;

/// Fetch one batch of jokes and print it to stdout
pub async fn run_fetch_command(locator: &ServiceLocator, category: Category, json: bool) -> Result<()> {
    let stdout = std::io::stdout();
    fetch_and_print(locator, category, json, &mut stdout.lock()).await
}

/// Drive one `get` and write every batch to `out`
///
/// A message left on the error channel afterwards becomes the command's error.
pub async fn fetch_and_print<W: Write>(
    locator: &ServiceLocator,
    category: Category,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let service: JokeService = locator.service();
    tracing::info!("Fetching {} jokes", category);

    let mut batches = service.get(category);
    while let Some(jokes) = batches.next().await {
        write_jokes(out, &jokes, json)?;
    }

    let message = locator.context().message();
    if !message.is_empty() {
        bail!("{}", message);
    }
    Ok(())
}

fn write_jokes<W: Write>(out: &mut W, jokes: &[Joke], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, jokes).context("Failed to encode jokes")?;
        writeln!(out)?;
        return Ok(());
    }

    for joke in jokes {
        writeln!(out, "{}", joke.punchline)?;
        writeln!(out, "    {}", joke.setup)?;
    }
    Ok(())
}
