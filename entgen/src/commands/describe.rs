use std::path::PathBuf;

use clap::Args;
use entgen_codegen::graph::{Config, Graph};
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct DescribeCommand {
    /// Schema file or directory
    pub path: PathBuf,
}

impl DescribeCommand {
    pub fn run(&self) -> Result<()> {
        let schema = entgen_schema::load(&self.path).unwrap_or_exit();
        let graph = Graph::new(Config::default(), &schema).unwrap_or_exit();

        print!("{}", graph.describe());
        Ok(())
    }
}
