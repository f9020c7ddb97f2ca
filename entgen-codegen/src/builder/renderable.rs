/// A piece of generated code, laid out by [`CodeBuilder`](super::CodeBuilder).
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    Line(String),
    Blank,
    /// Pre-formatted lines, re-indented at the current depth
    Text(String),
    /// `///` comment lines
    Doc(String),
    /// `header`, then `body` one level deeper, then `close`
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

impl CodeFragment {
    pub fn line(line: impl Into<String>) -> Self {
        Self::Line(line.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn doc(text: impl Into<String>) -> Self {
        Self::Doc(text.into())
    }

    /// A block closed by `}`.
    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some("}".to_string()),
        }
    }
}

/// An AST node that can describe itself as fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (**self).to_fragments()
    }
}

impl<T: Renderable> Renderable for [T] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.iter().flat_map(Renderable::to_fragments).collect()
    }
}
