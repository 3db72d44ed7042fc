//! Turning flags plus loaded configuration into a run plan.
//!
//! Flags win over configuration. Configuration (TOML files and
//! `PB_TYPEGEN_*` variables) only fills in what the flags leave out.

use std::path::PathBuf;

use anyhow::bail;
use pbz_config::{RemoteConfig, TypegenConfig};
use pbz_fetch::SchemaSource;

use crate::cli::Cli;

/// Overlay non-empty flag values onto the configured remote settings.
fn remote_settings(cli: &Cli, config: &TypegenConfig) -> RemoteConfig {
    let mut remote = config.remote.clone();
    let overrides = [
        (&cli.url, &mut remote.url),
        (&cli.token, &mut remote.token),
        (&cli.email, &mut remote.email),
        (&cli.password, &mut remote.password),
    ];
    for (flag, slot) in overrides {
        if let Some(value) = flag.as_deref().filter(|v| !v.is_empty()) {
            value.clone_into(slot);
        }
    }
    remote
}

/// Pick the schema source.
///
/// Priority: `--db`, `--json`, then a remote URL from `--url` or
/// configuration. A remote URL needs a token or an email/password pair.
pub fn resolve_source(cli: &Cli, config: &TypegenConfig) -> anyhow::Result<SchemaSource> {
    if let Some(path) = &cli.db {
        return Ok(SchemaSource::Database(path.clone()));
    }
    if let Some(path) = &cli.json {
        return Ok(SchemaSource::Json(path.clone()));
    }

    let remote = remote_settings(cli, config);
    if !remote.is_configured() {
        bail!(
            "missing schema source: pass --db, --json or --url, or set PB_TYPEGEN_URL \
             (with --env to read it from a .env file)"
        );
    }

    if remote.has_token() {
        return Ok(SchemaSource::RemoteToken {
            url: remote.url,
            token: remote.token,
        });
    }
    if remote.has_password() {
        return Ok(SchemaSource::RemotePassword {
            url: remote.url,
            email: remote.email,
            password: remote.password,
        });
    }
    bail!(
        "missing credentials for {}: pass --token, or --email with --password \
         (or set PB_TYPEGEN_TOKEN / PB_TYPEGEN_EMAIL and PB_TYPEGEN_PASSWORD)",
        remote.url
    )
}

pub fn output_path(cli: &Cli, config: &TypegenConfig) -> PathBuf {
    cli.out
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.path))
}

/// Remote output is always stamped; local output only on request.
pub fn wants_provenance(cli: &Cli, config: &TypegenConfig, source: &SchemaSource) -> bool {
    source.is_remote() || cli.provenance || config.output.provenance
}
