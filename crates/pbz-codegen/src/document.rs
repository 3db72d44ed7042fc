//! Whole-document assembly.

use chrono::{DateTime, SecondsFormat, Utc};
use pbz_core::CollectionDescriptor;

use crate::collection::render_collection;
use crate::config::GeneratorConfig;
use crate::naming::to_identifier;

/// Where a schema came from and when it was turned into code.
///
/// Rendered as two comment lines at the very top of the document. Purely
/// informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub source: String,
    pub generated_at: DateTime<Utc>,
}

impl Provenance {
    #[must_use]
    pub fn new(source: impl Into<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            source: source.into(),
            generated_at,
        }
    }

    /// Provenance stamped with the current wall-clock time.
    #[must_use]
    pub fn now(source: impl Into<String>) -> Self {
        Self::new(source, Utc::now())
    }

    fn source_comment(&self) -> String {
        format!("// Generated from: {}", self.source)
    }

    fn timestamp_comment(&self) -> String {
        format!(
            "// Generated at: {}",
            self.generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }
}

/// Render the `export enum` listing every collection name.
///
/// `names` must already be in output order.
#[must_use]
pub fn collection_enum(enum_name: &str, names: &[&str]) -> String {
    let members = names
        .iter()
        .map(|name| format!("\t{} = \"{name}\",", to_identifier(name)))
        .collect::<Vec<_>>()
        .join("\n");
    format!("export enum {enum_name} {{\n{members}\n}}")
}

/// Schema-to-code generator.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the complete TypeScript module.
    ///
    /// `collections` is sorted in place by name. The output depends only on
    /// the set of collections (not their input order) and on `provenance`.
    /// Malformed collections are left out of the blocks; unknown field kinds
    /// degrade to `z.any()` with a warning.
    #[must_use]
    pub fn generate(
        &self,
        collections: &mut [CollectionDescriptor],
        provenance: Option<&Provenance>,
    ) -> String {
        let config = &self.config;

        let mut names: Vec<&str> = collections
            .iter()
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
            .collect();
        names.sort();
        let enum_block = collection_enum(&config.enum_name, &names);

        collections.sort_by(|a, b| a.name.cmp(&b.name));
        let blocks: Vec<String> = collections
            .iter()
            .filter_map(|collection| render_collection(collection, config))
            .collect();
        tracing::debug!(
            collections = collections.len(),
            rendered = blocks.len(),
            "generated collection schemas"
        );

        let mut parts = Vec::with_capacity(blocks.len() + 10);
        if let Some(provenance) = provenance {
            parts.push(provenance.source_comment());
            parts.push(provenance.timestamp_comment());
        }
        parts.extend([
            config.header.clone(),
            config.imports.clone(),
            enum_block,
            config.alias_comment.clone(),
            config.alias_definitions(),
            config.base_system_fields_schema(),
            config.auth_system_fields_schema(),
            config.schemas_comment.clone(),
        ]);
        parts.extend(blocks);

        let mut document = parts
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");
        document.push('\n');
        document
    }
}
