//! Core utilities and types for the entgen code generator.
//!
//! This crate provides the field and identifier type vocabulary, naming
//! helpers and file writing primitives shared across the entgen crates.

mod error;
mod file;
mod types;
mod utils;

pub use error::ConfigError;
pub use file::{GeneratedFile, WriteMode, WriteResult, write_file};
pub use types::{FieldType, IdType};
pub use utils::{RUST_KEYWORDS, is_rust_keyword, pluralize, to_pascal_case, to_snake_case};
