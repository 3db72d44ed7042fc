//! Output file settings.

use serde::{Deserialize, Serialize};

/// Default output file name.
pub const DEFAULT_OUTPUT_PATH: &str = "pocketbase-zod.ts";

fn default_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Where the generated module is written.
    #[serde(default = "default_path")]
    pub path: String,

    /// Emit the provenance header for local sources too.
    #[serde(default)]
    pub provenance: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            provenance: false,
        }
    }
}
