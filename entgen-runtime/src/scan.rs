use chrono::{DateTime, Utc};

use crate::{ScanError, Value};

/// A destination a column value can be scanned into.
pub trait ScanTarget {
    fn scan_value(&mut self, value: Value) -> Result<(), ScanError>;
}

/// A value paired with a validity flag.
///
/// Scanning NULL leaves `value` at its default and clears `valid`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Nullable<T> {
    pub value: T,
    pub valid: bool,
}

impl<T> Nullable<T> {
    pub fn into_option(self) -> Option<T> {
        self.valid.then_some(self.value)
    }
}

impl<T: ScanTarget + Default> ScanTarget for Nullable<T> {
    fn scan_value(&mut self, value: Value) -> Result<(), ScanError> {
        if value.is_null() {
            *self = Self::default();
            return Ok(());
        }
        self.value.scan_value(value)?;
        self.valid = true;
        Ok(())
    }
}

impl<T: ScanTarget + Default> ScanTarget for Option<T> {
    fn scan_value(&mut self, value: Value) -> Result<(), ScanError> {
        if value.is_null() {
            *self = None;
            return Ok(());
        }
        let mut inner = T::default();
        inner.scan_value(value)?;
        *self = Some(inner);
        Ok(())
    }
}

fn mismatch(expected: &'static str, value: &Value) -> ScanError {
    match value {
        Value::Null => ScanError::UnexpectedNull { target: expected },
        other => ScanError::Mismatch {
            expected,
            found: other.kind(),
        },
    }
}

macro_rules! impl_scan_integer {
    ($($ty:ty),+) => {
        $(
            impl ScanTarget for $ty {
                fn scan_value(&mut self, value: Value) -> Result<(), ScanError> {
                    let target = stringify!($ty);
                    *self = match value {
                        Value::Int(v) => <$ty>::try_from(v).map_err(|_| ScanError::OutOfRange {
                            value: v.to_string(),
                            target,
                        })?,
                        Value::Uint(v) => <$ty>::try_from(v).map_err(|_| ScanError::OutOfRange {
                            value: v.to_string(),
                            target,
                        })?,
                        Value::Bool(v) => <$ty>::from(v),
                        other => return Err(mismatch(target, &other)),
                    };
                    Ok(())
                }
            }
        )+
    };
}

impl_scan_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

impl ScanTarget for f64 {
    fn scan_value(&mut self, value: Value) -> Result<(), ScanError> {
        *self = match value {
            Value::Float(v) => v,
            Value::Int(v) => v as f64,
            Value::Uint(v) => v as f64,
            other => return Err(mismatch("f64", &other)),
        };
        Ok(())
    }
}

impl ScanTarget for f32 {
    fn scan_value(&mut self, value: Value) -> Result<(), ScanError> {
        let mut wide = 0f64;
        wide.scan_value(value).map_err(|err| match err {
            ScanError::Mismatch { found, .. } => ScanError::Mismatch {
                expected: "f32",
                found,
            },
            ScanError::UnexpectedNull { .. } => ScanError::UnexpectedNull { target: "f32" },
            other => other,
        })?;
        *self = wide as f32;
        Ok(())
    }
}

impl ScanTarget for bool {
    fn scan_value(&mut self, value: Value) -> Result<(), ScanError> {
        *self = match value {
            Value::Bool(v) => v,
            Value::Int(v) => v != 0,
            Value::Uint(v) => v != 0,
            other => return Err(mismatch("bool", &other)),
        };
        Ok(())
    }
}

impl ScanTarget for String {
    fn scan_value(&mut self, value: Value) -> Result<(), ScanError> {
        *self = match value {
            Value::Text(v) => v,
            Value::Bytes(v) => String::from_utf8(v).map_err(|_| ScanError::Mismatch {
                expected: "String",
                found: "non-UTF-8 bytes",
            })?,
            other => return Err(mismatch("String", &other)),
        };
        Ok(())
    }
}

/// Raw buffers accept NULL as an empty buffer.
impl ScanTarget for Vec<u8> {
    fn scan_value(&mut self, value: Value) -> Result<(), ScanError> {
        *self = match value {
            Value::Null => Vec::new(),
            Value::Bytes(v) => v,
            Value::Text(v) => v.into_bytes(),
            other => return Err(mismatch("Vec<u8>", &other)),
        };
        Ok(())
    }
}

impl ScanTarget for DateTime<Utc> {
    fn scan_value(&mut self, value: Value) -> Result<(), ScanError> {
        *self = match value {
            Value::Time(v) => v,
            Value::Text(v) => DateTime::parse_from_rfc3339(&v)
                .map_err(|_| ScanError::Mismatch {
                    expected: "DateTime<Utc>",
                    found: "non-RFC 3339 text",
                })?
                .with_timezone(&Utc),
            other => return Err(mismatch("DateTime<Utc>", &other)),
        };
        Ok(())
    }
}
