//! In-memory output of a generation run.

mod registry;

pub use registry::{FileCategory, FileEntry, FileRegistry};
