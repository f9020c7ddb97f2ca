//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod generate;
mod init;
mod output;

pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
pub use init::InitReport;
pub use output::{Report, TerminalOutput};
