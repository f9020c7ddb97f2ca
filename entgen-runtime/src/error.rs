use thiserror::Error;

/// Failure while moving a column value into its scan destination.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("expected {expected} destination(s) for the row, got {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("cannot scan {found} value into {expected}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("value {value} is out of range for {target}")]
    OutOfRange { value: String, target: &'static str },

    #[error("unexpected NULL for non-nullable {target}")]
    UnexpectedNull { target: &'static str },

    #[error("scan called without a current row")]
    NoRow,

    #[error("failed to scan column {index} ('{column}')")]
    Column {
        index: usize,
        column: String,
        #[source]
        source: Box<ScanError>,
    },

    #[error(transparent)]
    Driver(Box<dyn std::error::Error + Send + Sync>),
}

/// A string did not name any variant of a generated enum type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {enum_name} value '{value}'")]
pub struct InvalidEnumValue {
    pub enum_name: &'static str,
    pub value: String,
}

/// Failure while decoding a row into an entity.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("unmarshal field {field}")]
    Json {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value for enum field {field}")]
    Enum {
        field: &'static str,
        #[source]
        source: InvalidEnumValue,
    },
}

impl DecodeError {
    /// Name of the field whose value could not be converted, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Scan(_) => None,
            Self::Json { field, .. } | Self::Enum { field, .. } => Some(*field),
        }
    }
}

/// Access to an edge that is not available on the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EdgeError {
    #[error("{edge} edge was not loaded")]
    NotLoaded { edge: &'static str },

    #[error("{edge} node was not found")]
    NotFound { edge: &'static str },
}
