//! Whole generated files: a header, then sections one blank line apart.

use entgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A generated Rust source file.
///
/// ```
/// use entgen_codegen_rust::{RawCode, RustFile};
///
/// let code = RustFile::new()
///     .header("// Code generated by entgen, DO NOT EDIT.")
///     .add(RawCode::new("pub mod user;"))
///     .render();
///
/// assert_eq!(code, "// Code generated by entgen, DO NOT EDIT.\n\npub mod user;\n");
/// ```
#[derive(Debug, Default)]
pub struct RustFile {
    header: Option<String>,
    sections: Vec<String>,
}

impl RustFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text written verbatim at the top of the file. A blank header is
    /// left out.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        let header = header.into();
        let header = header.trim_end();
        self.header = (!header.trim_start().is_empty()).then(|| header.to_string());
        self
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, node: impl Renderable) -> Self {
        self.push(node);
        self
    }

    /// Append `node` as a new section. Nodes that render nothing add no
    /// section.
    pub fn push(&mut self, node: impl Renderable) {
        let mut builder = CodeBuilder::rust();
        builder.emit(&node);
        let section = builder.build();
        if !section.is_empty() {
            self.sections.push(section);
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(header) = &self.header {
            out.push_str(header);
            out.push('\n');
            if !self.sections.is_empty() {
                out.push('\n');
            }
        }
        out.push_str(&self.sections.join("\n"));
        out
    }
}

/// Code that is already rendered, such as the output of another template.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Join `lines` into one block.
    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        Self(lines.join("\n"))
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let code = self.0.trim_matches('\n');
        if code.trim().is_empty() {
            return Vec::new();
        }
        vec![CodeFragment::text(code)]
    }
}
