use std::{path::PathBuf, sync::Arc};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for entgen-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Every entity keeps the context of the document it was declared in, so
/// errors found after loading (for example while resolving edges) can still
/// point at the offending line.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "schema/user.toml");
/// ctx.validation_error("missing entity name", None);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: Arc<str>,
    filename: Arc<str>,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            src: Arc::from(src),
            filename: Arc::from(filename),
        }
    }

    /// Context for entities declared in code rather than loaded from a file.
    pub fn inline(name: &str) -> Self {
        Self::new("", &format!("<{name}>"))
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename(), self.src.to_string())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create a reserved keyword error.
    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ReservedKeyword {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create an unknown field type error.
    pub fn unknown_field_type_error(
        &self,
        entity: impl Into<String>,
        field: impl Into<String>,
        ty: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownFieldType {
            src: self.named_source(),
            span,
            entity: entity.into(),
            field: field.into(),
            ty: ty.into(),
        })
    }

    /// Create a duplicate entity error, pointing at the second declaration.
    pub fn duplicate_entity_error(
        &self,
        name: impl Into<String>,
        first: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateEntity {
            src: self.named_source(),
            span,
            name: name.into(),
            first: first.into(),
        })
    }

    /// Create a dangling edge error.
    pub fn dangling_edge_error(
        &self,
        entity: impl Into<String>,
        edge: impl Into<String>,
        target: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DanglingEdge {
            src: self.named_source(),
            span,
            entity: entity.into(),
            edge: edge.into(),
            target: target.into(),
        })
    }

    /// Create a missing inverse error.
    pub fn missing_inverse_error(
        &self,
        entity: impl Into<String>,
        edge: impl Into<String>,
        target: impl Into<String>,
        inverse: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::MissingInverse {
            src: self.named_source(),
            span,
            entity: entity.into(),
            edge: edge.into(),
            target: target.into(),
            inverse: inverse.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'entgen init <Name>' to create a new schema"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no schema files found in '{path}'")]
    #[diagnostic(
        code(entgen::empty_schema),
        help("schema directories are searched for '*.toml' files, one entity per file")
    )]
    NoEntities { path: PathBuf },

    #[error("failed to parse schema")]
    #[diagnostic(code(entgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(entgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a Rust reserved keyword")]
    #[diagnostic(
        code(entgen::reserved_keyword),
        help("rename the {context} '{name}' to something else")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved keyword used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(entgen::invalid_identifier),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("invalid schema name '{name}'")]
    #[diagnostic(
        code(entgen::invalid_schema_name),
        help("{reason}, e.g. 'User' or 'GroupInfo'")
    )]
    InvalidSchemaName { name: String, reason: String },

    #[error("duplicate field '{name}' in entity '{entity}'")]
    #[diagnostic(code(entgen::duplicate_field), help("rename one of the fields"))]
    DuplicateField {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        entity: String,
        name: String,
    },

    #[error("duplicate edge '{name}' in entity '{entity}'")]
    #[diagnostic(code(entgen::duplicate_edge), help("rename one of the edges"))]
    DuplicateEdge {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        entity: String,
        name: String,
    },

    #[error("duplicate entity '{name}'")]
    #[diagnostic(
        code(entgen::duplicate_entity),
        help("'{name}' is already declared in '{first}'")
    )]
    DuplicateEntity {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared again here")]
        span: Option<SourceSpan>,
        name: String,
        first: String,
    },

    #[error("unknown type '{ty}' for field '{entity}.{field}'")]
    #[diagnostic(
        code(entgen::unknown_type),
        help(
            "valid types are: bool, time, json, enum, string, float32, float64, int8, int16, int32, int, int64, uint8, uint16, uint32, uint, uint64"
        )
    )]
    UnknownFieldType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown type")]
        span: Option<SourceSpan>,
        entity: String,
        field: String,
        ty: String,
    },

    #[error("edge '{entity}.{edge}' references undeclared entity '{target}'")]
    #[diagnostic(
        code(entgen::dangling_edge),
        help("declare an entity named '{target}' or fix the edge target")
    )]
    DanglingEdge {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown entity")]
        span: Option<SourceSpan>,
        entity: String,
        edge: String,
        target: String,
    },

    #[error("edge '{entity}.{edge}' references '{target}.{inverse}', which is not an edge to '{entity}'")]
    #[diagnostic(
        code(entgen::missing_inverse),
        help("'ref' must name a \"to\" edge declared on '{target}' that targets '{entity}'")
    )]
    MissingInverse {
        #[source_code]
        src: NamedSource<String>,
        #[label("no matching edge")]
        span: Option<SourceSpan>,
        entity: String,
        edge: String,
        target: String,
        inverse: String,
    },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
