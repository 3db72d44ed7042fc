//! # pbz-core
//!
//! Core types shared across pocketbase-zod crates:
//! - Collection and field descriptors as delivered by the schema fetchers
//! - Closed enumerations for collection types and field kinds
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;

pub use entities::{CollectionDescriptor, FieldDescriptor, FieldOptions};
pub use enums::{CollectionType, FieldKind};
pub use errors::CoreError;
