use entgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::{Header, member};

/// A named struct field.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    ty: String,
    doc: Option<String>,
    private: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            private: false,
        }
    }

    pub fn doc(self, doc: impl Into<String>) -> Self {
        self.doc_opt(Some(doc))
    }

    /// Document the field when `doc` is present.
    pub fn doc_opt(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    fn declaration(&self) -> String {
        let vis = if self.private { "" } else { "pub " };
        format!("{vis}{}: {},", self.name, self.ty)
    }
}

/// A struct with named fields; a unit struct when it has none.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    header: Header,
    fields: Vec<Field>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            header: Header::default(),
            fields: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.header.doc = Some(doc.into());
        self
    }

    pub fn derive(mut self, derive: impl Into<String>) -> Self {
        self.header.derives.push(derive.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.header.private = true;
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.header.fragments();
        let vis = self.header.visibility();
        if self.fields.is_empty() {
            fragments.push(CodeFragment::line(format!("{vis}struct {};", self.name)));
            return fragments;
        }

        let body = self
            .fields
            .iter()
            .flat_map(|field| member(field.doc.as_ref(), field.declaration()))
            .collect();
        fragments.push(CodeFragment::block(
            format!("{vis}struct {} {{", self.name),
            body,
        ));
        fragments
    }
}
