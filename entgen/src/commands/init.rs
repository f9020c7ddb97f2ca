use std::path::PathBuf;

use clap::Args;
use entgen_schema::SchemaFile;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Entity names, each beginning with an uppercase letter
    pub names: Vec<String>,

    /// Directory for the schema files
    #[arg(long, default_value = "ent/schema")]
    pub target: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let files = self
            .names
            .iter()
            .map(SchemaFile::new)
            .collect::<entgen_schema::Result<Vec<_>>>()
            .unwrap_or_exit();

        let report = ops::init(&files, &self.target)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
