//! Text assembly for built-in templates.
//!
//! Templates describe their output as [`CodeFragment`]s (usually through
//! [`Renderable`] AST nodes) and a [`CodeBuilder`] lays the fragments out
//! with indentation.

mod code_builder;
mod renderable;

pub use code_builder::{CodeBuilder, Indent};
pub use renderable::{CodeFragment, Renderable};
