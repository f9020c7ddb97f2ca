//! Runtime support for code generated by entgen.
//!
//! Generated entity modules decode rows through the [`Rows`] cursor
//! contract: every column is scanned into a [`ScanTarget`] in a fixed order
//! (identifier first, then fields in declaration order) and then converted
//! into the entity's field types.
//!
//! ```ignore
//! let mut rows = MemoryRows::new(User::COLUMNS)
//!     .with_row(vec![Value::Int(1), Value::from("a8m")]);
//! let users = User::from_rows(&mut rows)?;
//! ```

mod decode;
mod edge;
mod error;
mod rows;
mod scan;
mod value;

pub use decode::{decode_enum, decode_json};
pub use edge::Edge;
pub use error::{DecodeError, EdgeError, InvalidEnumValue, ScanError};
pub use rows::{MemoryRows, Rows};
pub use scan::{Nullable, ScanTarget};
pub use value::Value;
