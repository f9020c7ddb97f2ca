//! Validation utilities for schema identifiers

use entgen_core::is_rust_keyword;
use miette::SourceSpan;

use crate::{Result, SourceContext};

/// Field names generated for every entity
pub(crate) const RESERVED_FIELD_NAMES: &[&str] = &["id", "edges"];

/// Where in a schema document validation is happening: the document
/// itself plus the entity being read, for error context.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: SourceContext,
    /// Enclosing names, outermost first
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: SourceContext) -> Self {
        Self {
            source,
            path: Vec::new(),
        }
    }

    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// A context one level deeper, inside `segment`.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut nested = self.clone();
        nested.path.push(segment);
        nested
    }

    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// `"field in 'User'"`, or just the kind at the top level.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Reject Rust keywords and anything that is not an identifier.
    pub fn validate_name(&self, name: &str, kind: &str, span: Option<SourceSpan>) -> Result<()> {
        if is_rust_keyword(name) {
            return Err(self
                .source
                .reserved_keyword_error(name, self.context_for(kind), span));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                span,
            ));
        }

        Ok(())
    }

    /// Validate an entity name: a valid identifier starting with an
    /// uppercase letter.
    pub fn validate_entity_name(&self, name: &str, span: Option<SourceSpan>) -> Result<()> {
        self.validate_name(name, "entity", span)?;
        if !name.starts_with(|c: char| c.is_ascii_uppercase()) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for("entity"),
                "entity names must begin with an uppercase letter",
                span,
            ));
        }
        Ok(())
    }

    /// Validate a field name, rejecting the names every entity reserves.
    pub fn validate_field_name(&self, name: &str, span: Option<SourceSpan>) -> Result<()> {
        self.validate_name(name, "field", span)?;
        if RESERVED_FIELD_NAMES.contains(&name) {
            return Err(self.source.validation_error(
                format!(
                    "field name '{}' is reserved in entity '{}'",
                    name,
                    self.path_string()
                ),
                span,
            ));
        }
        Ok(())
    }
}

/// Why `name` is not a usable identifier, if it is not.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    if name.chars().all(|c| c == '_') {
        return Some("name must contain at least one letter");
    }

    None
}
