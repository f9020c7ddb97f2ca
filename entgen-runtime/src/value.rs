use chrono::{DateTime, Utc};

/// A single column value as reported by a query engine.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed integer of any width
    Int(i64),

    /// Unsigned integer of any width
    Uint(u64),

    /// Floating point number
    Float(f64),

    /// Text value
    Text(String),

    /// Raw bytes
    Bytes(Vec<u8>),

    /// Timestamp
    Time(DateTime<Utc>),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Name of the value kind, used in scan errors.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::Time(_) => "time",
        }
    }
}

macro_rules! impl_from {
    ($variant:ident: $($ty:ty),+ => $into:ty) => {
        $(
            impl From<$ty> for Value {
                fn from(src: $ty) -> Self {
                    Self::$variant(<$into>::from(src))
                }
            }
        )+
    };
}

impl_from!(Bool: bool => bool);
impl_from!(Int: i8, i16, i32, i64 => i64);
impl_from!(Uint: u8, u16, u32, u64 => u64);
impl_from!(Float: f32, f64 => f64);
impl_from!(Text: String, &str => String);
impl_from!(Bytes: Vec<u8>, &[u8] => Vec<u8>);
impl_from!(Time: DateTime<Utc> => DateTime<Utc>);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        src.map_or(Self::Null, Into::into)
    }
}
