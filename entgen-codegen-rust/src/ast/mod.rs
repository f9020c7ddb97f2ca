//! Builders for the Rust items templates emit: structs, enums, impl blocks
//! and functions. Each is [`Renderable`](entgen_codegen::builder::Renderable).

mod enums;
mod fns;
mod impls;
mod structs;

pub use enums::{Enum, Variant};
pub use fns::{Fn, Param};
pub use impls::Impl;
pub use structs::{Field, Struct};

use entgen_codegen::builder::CodeFragment;

/// Doc comment, derives and visibility of an item.
#[derive(Debug, Clone, Default)]
struct Header {
    doc: Option<String>,
    derives: Vec<String>,
    private: bool,
}

impl Header {
    fn visibility(&self) -> &'static str {
        if self.private { "" } else { "pub " }
    }

    fn fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<_> = self.doc.iter().map(CodeFragment::doc).collect();
        if !self.derives.is_empty() {
            fragments.push(CodeFragment::line(format!(
                "#[derive({})]",
                self.derives.join(", ")
            )));
        }
        fragments
    }
}

/// A documented line inside an item body.
fn member(doc: Option<&String>, line: String) -> impl Iterator<Item = CodeFragment> {
    doc.map(CodeFragment::doc)
        .into_iter()
        .chain(std::iter::once(CodeFragment::line(line)))
}
