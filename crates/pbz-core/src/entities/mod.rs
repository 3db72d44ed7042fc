//! Descriptor types delivered by the schema fetchers.

mod collection;
mod field;

pub use collection::CollectionDescriptor;
pub use field::{FieldDescriptor, FieldOptions};
