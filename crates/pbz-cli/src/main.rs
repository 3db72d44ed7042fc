use anyhow::Context;
use clap::Parser;
use pbz_codegen::{Generator, Provenance};
use pbz_config::TypegenConfig;

mod cli;
mod output;
mod resolve;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("pbz error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = load_config(&cli)?;
    let source = resolve::resolve_source(&cli, &config)?;

    let mut collections = source
        .fetch()
        .await
        .with_context(|| format!("failed to read schema from {}", source.describe()))?;
    tracing::info!(count = collections.len(), source = %source.describe(), "loaded collections");

    let provenance = resolve::wants_provenance(&cli, &config, &source)
        .then(|| Provenance::now(source.describe()));
    let document = Generator::default().generate(&mut collections, provenance.as_ref());

    let out = resolve::output_path(&cli, &config);
    output::write_document(&out, &document).await?;
    if !cli.quiet {
        println!("Created Zod schemas at {}", out.display());
    }
    Ok(())
}

fn load_config(cli: &cli::Cli) -> anyhow::Result<TypegenConfig> {
    if let Some(dir) = cli.env.as_deref() {
        match TypegenConfig::load_dotenv(Some(dir)).context("failed to load .env")? {
            Some(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            None => tracing::warn!(dir = %dir.display(), "no .env file found"),
        }
    }
    TypegenConfig::load().context("failed to load configuration")
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PBZ_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
