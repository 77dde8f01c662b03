//! `s3api` binary: parse the (empty) command line, install logging, serve.
//!
//! Uses `anyhow` at the error boundary; any failure prints `Error: …` and
//! exits with status 1.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use s3api::{Server, app};

/// Simple HTTP server read and write to an s3 bucket.
#[derive(Parser, Debug)]
#[command(name = "s3api", version)]
struct Cli {}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let _cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version land here too; they are not failures.
        Err(e) if !e.use_stderr() => {
            e.print()?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("Starting server on port {}", app::PORT);

    Server::bind(app::listen_addr())
        .serve(app::router())
        .await
        .with_context(|| format!("serving on {}", app::listen_addr()))
}
