use entgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::{Header, member};

/// A unit variant.
#[derive(Debug, Clone)]
pub struct Variant {
    name: String,
    doc: Option<String>,
}

impl Variant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// A fieldless enum.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    header: Header,
    variants: Vec<Variant>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            header: Header::default(),
            variants: Vec::new(),
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

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self
            .variants
            .iter()
            .flat_map(|variant| member(variant.doc.as_ref(), format!("{},", variant.name)))
            .collect();

        let mut fragments = self.header.fragments();
        fragments.push(CodeFragment::block(
            format!("{}enum {} {{", self.header.visibility(), self.name),
            body,
        ));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_variant() {
        let code = Enum::new("UserStatus")
            .derive("Debug")
            .derive("Clone")
            .variant(Variant::new("Active"))
            .variant(Variant::new("InReview").doc("Waiting for a moderator."))
            .build();

        assert_eq!(
            code,
            "#[derive(Debug, Clone)]\n\
             pub enum UserStatus {\n    \
             Active,\n    \
             /// Waiting for a moderator.\n    \
             InReview,\n\
             }\n"
        );
    }
}
