//! Schema description format for entgen.
//!
//! A schema is a file or a directory of TOML documents, one entity per
//! document. Loading produces a [`SchemaSpec`]: plain data with the declared
//! fields and edges in declaration order, plus enough source information
//! for later stages to report errors against the original documents.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod load;
mod parse;
mod scaffold;
mod spec;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use load::{load, load_file};
pub use parse::parse_str;
pub use scaffold::SchemaFile;
pub use spec::{EdgeDirection, EdgeSpec, EntitySpec, FieldSpec, SchemaSpec};
pub use validate::ParseContext;
