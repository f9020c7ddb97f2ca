//! Schema-to-code generation pipeline for entgen.
//!
//! This crate provides the language-agnostic half of the generator, used by
//! language-specific generators (e.g., `entgen-codegen-rust`).
//!
//! # Module Organization
//!
//! - [`graph`] - Graph model built from a loaded schema (entities, fields, edges)
//! - [`decode`] - Decode strategy selection for each field
//! - [`template`] - Template registry, external text templates and emission
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output management (FileRegistry)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper)

pub mod builder;
pub mod decode;
pub mod generation;
pub mod graph;
pub mod language;
pub mod template;
