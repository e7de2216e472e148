//! nbindex — regenerate the notebook list inside the site index page.
//!
//! Scans `notebooks/` and rewrites `index.html`, both relative to the
//! current working directory. Takes no arguments; logging is controlled
//! through `RUST_LOG`.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nbindex")]
#[command(version)]
#[command(about = "Regenerate the notebook link list inside index.html")]
struct Cli {}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    nbindex_site::update_index(Path::new("."))?;
    Ok(())
}
