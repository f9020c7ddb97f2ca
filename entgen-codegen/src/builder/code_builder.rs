use super::{CodeFragment, Renderable};

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(pub &'static str);

impl Indent {
    /// Four spaces, as rustfmt lays out code.
    pub const RUST: Self = Self("    ");
    pub const TAB: Self = Self("\t");
}

impl Default for Indent {
    fn default() -> Self {
        Self::RUST
    }
}

/// Accumulates generated lines at a current nesting depth.
///
/// ```
/// use entgen_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::rust();
/// builder.apply_fragment(CodeFragment::block(
///     "impl User {",
///     vec![CodeFragment::line("pub const COLUMNS: &'static [&'static str] = &[\"id\"];")],
/// ));
///
/// assert_eq!(
///     builder.build(),
///     "impl User {\n    pub const COLUMNS: &'static [&'static str] = &[\"id\"];\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent: Indent,
    depth: usize,
    out: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            depth: 0,
            out: String::new(),
        }
    }

    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    /// Append `line` at the current depth.
    pub fn push_line(&mut self, line: &str) -> &mut Self {
        for _ in 0..self.depth {
            self.out.push_str(self.indent.0);
        }
        self.out.push_str(line);
        self.out.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    /// Append pre-formatted text line by line. Whitespace-only lines come
    /// out empty.
    pub fn push_text(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            if line.trim().is_empty() {
                self.push_blank();
            } else {
                self.push_line(line);
            }
        }
        self
    }

    /// Append `text` as `///` lines.
    pub fn push_doc(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                self.push_line("///");
            } else {
                self.push_line(&format!("/// {line}"));
            }
        }
        self
    }

    /// Lay out every fragment of `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(line) => {
                self.push_line(&line);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Text(text) => {
                self.push_text(&text);
            }
            CodeFragment::Doc(text) => {
                self.push_doc(&text);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.depth += 1;
                for inner in body {
                    self.apply_fragment(inner);
                }
                self.depth -= 1;
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
        }
    }

    pub fn build(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_blocks() {
        let mut builder = CodeBuilder::rust();
        builder.apply_fragment(CodeFragment::block(
            "impl User {",
            vec![CodeFragment::block(
                "fn table() -> &'static str {",
                vec![CodeFragment::line("\"users\"")],
            )],
        ));

        assert_eq!(
            builder.build(),
            "impl User {\n    fn table() -> &'static str {\n        \"users\"\n    }\n}\n"
        );
    }

    #[test]
    fn test_doc_keeps_paragraph_breaks() {
        let mut builder = CodeBuilder::rust();
        builder.apply_fragment(CodeFragment::block(
            "struct User {",
            vec![
                CodeFragment::doc("First line.\n\nSecond line."),
                CodeFragment::line("age: i32,"),
            ],
        ));

        assert_eq!(
            builder.build(),
            "struct User {\n    /// First line.\n    ///\n    /// Second line.\n    age: i32,\n}\n"
        );
    }

    #[test]
    fn test_text_indents_non_empty_lines() {
        let mut builder = CodeBuilder::new(Indent::TAB);
        builder.apply_fragment(CodeFragment::block(
            "fn f() {",
            vec![CodeFragment::text("let a = 1;\n  \nlet b = 2;")],
        ));
        assert_eq!(builder.build(), "fn f() {\n\tlet a = 1;\n\n\tlet b = 2;\n}\n");
    }

    #[test]
    fn test_emit_renderable() {
        struct Columns;
        impl Renderable for Columns {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::line("id,"), CodeFragment::Blank, CodeFragment::line("age,")]
            }
        }

        let mut builder = CodeBuilder::rust();
        builder.emit(&Columns);
        assert_eq!(builder.build(), "id,\n\nage,\n");
    }
}
