use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;

use creator_catalog::cli::{execute, Cli};
use creator_catalog::creators::CreatorClient;
use creator_catalog::logging::init_tracing;
use creator_catalog::store::StoreConnector;

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    tracing::debug!(
        base_url = config.store.base_url.as_deref().unwrap_or("<unset>"),
        resource = %config.store.resource,
        configured = config.store.is_configured(),
        "Loaded store configuration"
    );

    let resource = config.store.resource.clone();
    let connector = StoreConnector::new(config.store).context("Failed to build HTTP client")?;
    let client = CreatorClient::with_resource(connector, resource);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli.command, cli.json, &client, &mut out, confirm).await?;
    out.flush()?;
    Ok(())
}

fn confirm(prompt: &str) -> io::Result<bool> {
    let mut stderr = io::stderr();
    write!(stderr, "{} [y/N] ", prompt)?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
