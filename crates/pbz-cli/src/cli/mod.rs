use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for the `pbz` binary.
#[derive(Debug, Parser)]
#[command(
    name = "pbz",
    version,
    about = "Generate Zod schemas from a PocketBase collection schema"
)]
pub struct Cli {
    /// PocketBase SQLite database (e.g. pb_data/data.db)
    #[arg(short, long, value_name = "PATH", conflicts_with_all = ["json", "url"])]
    pub db: Option<PathBuf>,

    /// JSON export of the collections from the admin UI
    #[arg(short, long, value_name = "PATH", conflicts_with = "url")]
    pub json: Option<PathBuf>,

    /// URL of a running PocketBase instance
    #[arg(short, long)]
    pub url: Option<String>,

    /// Admin auth token for --url
    #[arg(short, long)]
    pub token: Option<String>,

    /// Admin email for --url
    #[arg(long)]
    pub email: Option<String>,

    /// Admin password for --url
    #[arg(short, long)]
    pub password: Option<String>,

    /// Load a .env file from DIR before reading PB_TYPEGEN_* variables
    #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = ".")]
    pub env: Option<PathBuf>,

    /// Output file [default: pocketbase-zod.ts]
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Stamp the source and time at the top of the output for local sources too
    #[arg(long)]
    pub provenance: bool,

    /// Quiet mode (errors only, no success message)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
