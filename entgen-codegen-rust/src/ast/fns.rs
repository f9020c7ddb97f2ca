use entgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::Header;

/// A parameter in a Rust function. An empty type renders the name alone
/// (receivers such as `&self`).
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// `&self`
    pub fn self_ref() -> Self {
        Self::new("&self", "")
    }

    fn render(&self) -> String {
        if self.ty.is_empty() {
            self.name.clone()
        } else {
            format!("{}: {}", self.name, self.ty)
        }
    }
}

/// Builder for Rust functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    header: Header,
    generics: Option<String>,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<String>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            header: Header::default(),
            generics: None,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.header.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.header.private = true;
        self
    }

    /// Generic parameters, without the angle brackets.
    pub fn generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = Some(generics.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Add body lines.
    pub fn body_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }

    fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(Param::render)
            .collect::<Vec<_>>()
            .join(", ");
        let generics = self
            .generics
            .as_ref()
            .map(|g| format!("<{g}>"))
            .unwrap_or_default();
        let ret = self
            .return_type
            .as_ref()
            .map(|r| format!(" -> {r}"))
            .unwrap_or_default();

        format!(
            "{}fn {}{}({}){} {{",
            self.header.visibility(),
            self.name,
            generics,
            params,
            ret
        )
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.header.fragments();

        let body = self
            .body
            .iter()
            .map(|line| {
                if line.is_empty() {
                    CodeFragment::Blank
                } else {
                    CodeFragment::line(line.as_str())
                }
            })
            .collect();
        fragments.push(CodeFragment::block(self.signature(), body));
        fragments
    }
}
