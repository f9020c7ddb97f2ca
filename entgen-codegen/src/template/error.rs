use std::path::PathBuf;

use thiserror::Error;

use crate::decode::UnresolvedStrategy;

/// Errors raised while loading or executing templates.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template '{name}' is not defined")]
    Undefined { name: String },

    #[error("{source_name}:{line}: {message}")]
    Syntax {
        source_name: String,
        line: usize,
        message: String,
    },

    #[error("template '{template}' uses unknown variable '{name}'")]
    UnknownVariable { template: String, name: String },

    #[error("template '{template}' uses '{name}' outside of a {scope} range")]
    OutOfScope {
        template: String,
        name: String,
        scope: &'static str,
    },

    #[error("template '{template}' cannot range over '{target}'")]
    InvalidRange { template: String, target: String },

    #[error("template '{template}' requires an entity in scope")]
    MissingEntity { template: String },

    #[error("template '{template}' failed for entity '{entity}'")]
    UnresolvedStrategy {
        template: String,
        entity: String,
        #[source]
        source: UnresolvedStrategy,
    },

    #[error("failed to read template source '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template '{name}' cannot name an output module: {reason}")]
    InvalidModuleName { name: String, reason: &'static str },

    #[error("template '{name}' exceeds the nesting limit of {limit}")]
    RecursionLimit { name: String, limit: usize },
}

impl TemplateError {
    pub(crate) fn syntax(source_name: &str, line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            source_name: source_name.to_string(),
            line,
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
