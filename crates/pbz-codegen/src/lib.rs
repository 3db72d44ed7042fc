//! # pbz-codegen
//!
//! Turns PocketBase collection descriptors into a single TypeScript module of
//! Zod schemas and inferred types.
//!
//! ## Pipeline
//!
//! ```text
//! Generator (document)
//!   └─ render_collection (collection)     one block per collection, sorted by name
//!        └─ render_field (field)          one `name: expr,` line per field
//!             └─ validator_expression     closed match over FieldKind
//!                  └─ naming              identifiers, quoted keys, option enum names
//! ```
//!
//! Generation is synchronous and performs no I/O. Every literal the output
//! contains (header, import line, alias and schema names) comes from a
//! [`GeneratorConfig`], so independent runs share no state.
//!
//! ```
//! use pbz_codegen::Generator;
//! use pbz_core::{CollectionDescriptor, CollectionType, FieldDescriptor};
//!
//! let mut collections = vec![CollectionDescriptor::new(
//!     "posts",
//!     CollectionType::Base,
//!     vec![FieldDescriptor::new("title", "text").required(true)],
//! )];
//! let output = Generator::default().generate(&mut collections, None);
//! assert!(output.contains("\ttitle: z.string(),"));
//! ```

pub mod collection;
pub mod config;
pub mod document;
pub mod field;
pub mod mapping;
pub mod naming;

pub use collection::render_collection;
pub use config::GeneratorConfig;
pub use document::{Generator, Provenance};
pub use field::render_field;
pub use mapping::validator_expression;
pub use naming::{option_enum_name, sanitize_field_name, to_identifier};
