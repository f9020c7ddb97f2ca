//! Rust impl block builder.

use entgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::Fn;

#[derive(Debug, Clone)]
enum Item {
    /// Associated type or constant, one line
    Line(String),
    Method(Fn),
    /// Pre-rendered text, indented with the block
    Text(String),
}

/// Builder for Rust impl blocks. Items are separated by blank lines.
#[derive(Debug, Clone)]
pub struct Impl {
    type_name: String,
    trait_name: Option<String>,
    items: Vec<Item>,
}

impl Impl {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            trait_name: None,
            items: Vec::new(),
        }
    }

    /// Create an impl block for a trait.
    pub fn for_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.trait_name = Some(trait_name.into());
        self
    }

    /// Add an associated item written on one line (`type Err = ...;`).
    pub fn item(mut self, line: impl Into<String>) -> Self {
        self.items.push(Item::Line(line.into()));
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.items.push(Item::Method(method));
        self
    }

    /// Add already rendered items. Empty text is ignored.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.trim().is_empty() {
            self.items.push(Item::Text(text));
        }
        self
    }

    /// Build the impl block as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }

    fn header(&self) -> String {
        match &self.trait_name {
            Some(trait_name) => format!("impl {} for {} {{", trait_name, self.type_name),
            None => format!("impl {} {{", self.type_name),
        }
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            match item {
                Item::Line(line) => body.push(CodeFragment::line(line.as_str())),
                Item::Method(method) => body.extend(method.to_fragments()),
                Item::Text(text) => body.push(CodeFragment::text(text.trim_end())),
            }
        }
        vec![CodeFragment::block(self.header(), body)]
    }
}
