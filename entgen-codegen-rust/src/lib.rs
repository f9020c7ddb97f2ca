//! Rust code generator for entgen.
//!
//! [`Generator`] renders every entity of a [`Graph`](entgen_codegen::graph::Graph)
//! into a module that decodes rows through `entgen-runtime`, using the
//! templates from [`templates::builtin_templates`] unless external sources
//! override them.

mod generator;
mod rust_file;
mod type_mapper;

pub mod ast;
pub mod templates;

pub use ast::{Enum, Field, Fn, Impl, Param, Struct, Variant};
pub use entgen_codegen::language::LanguageCodegen;
pub use generator::Generator;
pub use rust_file::{RawCode, RustFile};
pub use type_mapper::RustTypeMapper;
