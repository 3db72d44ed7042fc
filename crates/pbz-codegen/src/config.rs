//! Literal text used by the generator.

use pbz_core::CollectionType;

/// Immutable set of names and fixed snippets the generated module is built from.
///
/// [`GeneratorConfig::default`] produces the canonical pocketbase-typegen
/// output. A generator holds its config by value, so concurrent or repeated
/// runs never observe each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Block comment at the top of the document.
    pub header: String,
    /// Import statement for the validator library.
    pub imports: String,
    /// Name of the exported collection-name enum.
    pub enum_name: String,
    /// Comment preceding the shared alias definitions.
    pub alias_comment: String,
    /// Comment preceding the per-collection blocks.
    pub schemas_comment: String,
    pub record_id_alias: String,
    pub iso_date_alias: String,
    pub html_alias: String,
    pub base_system_schema: String,
    pub auth_system_schema: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            header: "/**\n* This file was @generated using pocketbase-typegen\n*/".to_string(),
            imports: "import { z } from 'zod'".to_string(),
            enum_name: "Collections".to_string(),
            alias_comment: "// Alias types for improved usability".to_string(),
            schemas_comment: "// ===== ZOD SCHEMAS =====".to_string(),
            record_id_alias: "RecordIdString".to_string(),
            iso_date_alias: "IsoDateString".to_string(),
            html_alias: "HTMLString".to_string(),
            base_system_schema: "BaseSystemFieldsSchema".to_string(),
            auth_system_schema: "AuthSystemFieldsSchema".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Shared alias validators. The leading newline is part of the canonical
    /// layout and yields an extra blank line after the alias comment.
    #[must_use]
    pub fn alias_definitions(&self) -> String {
        format!(
            "\nexport const {} = z.string().length(15)\n\
             export const {} = z.string().datetime()\n\
             export const {} = z.string()",
            self.record_id_alias, self.iso_date_alias, self.html_alias
        )
    }

    /// Fields present on every record.
    #[must_use]
    pub fn base_system_fields_schema(&self) -> String {
        format!(
            "export const {base} = z.object({{\n\
             \tid: {id},\n\
             \tcollectionId: z.string(),\n\
             \tcollectionName: z.string(),\n\
             \tcreated: {date},\n\
             \tupdated: {date},\n\
             \texpand: z.record(z.any()).optional(),\n\
             }})",
            base = self.base_system_schema,
            id = self.record_id_alias,
            date = self.iso_date_alias,
        )
    }

    /// Extra fields present on records of `auth` collections.
    #[must_use]
    pub fn auth_system_fields_schema(&self) -> String {
        format!(
            "export const {auth} = {base}.merge(z.object({{\n\
             \temail: z.string().email(),\n\
             \temailVisibility: z.boolean(),\n\
             \tusername: z.string(),\n\
             \tverified: z.boolean(),\n\
             }}))",
            auth = self.auth_system_schema,
            base = self.base_system_schema,
        )
    }

    /// System-field schema a collection's response schema merges with.
    #[must_use]
    pub fn system_fields_schema_for(&self, kind: CollectionType) -> &str {
        match kind {
            CollectionType::Auth => &self.auth_system_schema,
            CollectionType::Base | CollectionType::View => &self.base_system_schema,
        }
    }
}
