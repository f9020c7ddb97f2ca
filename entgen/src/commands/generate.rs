use std::path::{Path, PathBuf};

use clap::Args;
use entgen_codegen::graph::{Config, Graph};
use entgen_core::{ConfigError, IdType};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Schema file or directory
    pub path: PathBuf,

    /// Type of the id field of every entity
    #[arg(long = "idtype", value_name = "TYPE", default_value = "int", value_parser = parse_id_type)]
    pub id_type: IdType,

    /// Header prepended to every generated file
    #[arg(long, value_parser = parse_header)]
    pub header: Option<String>,

    /// Output directory (defaults to the parent of the schema path)
    #[arg(long)]
    pub target: Option<PathBuf>,

    /// Template file or directory to load; later sources override earlier ones
    #[arg(long = "template", value_name = "PATH")]
    pub templates: Vec<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

fn parse_id_type(value: &str) -> Result<IdType, ConfigError> {
    value.parse()
}

fn parse_header(value: &str) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            name: "header",
            reason: "must not be blank".to_string(),
        });
    }
    Ok(value.to_string())
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let schema = entgen_schema::load(&self.path).unwrap_or_exit();
        let graph = Graph::new(self.config(), &schema).unwrap_or_exit();

        let report = ops::generate(&graph, self.dry_run)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn config(&self) -> Config {
        let mut config = Config::default()
            .with_id_type(self.id_type)
            .with_templates(self.templates.iter().cloned())
            .with_target(self.target.clone().unwrap_or_else(|| default_target(&self.path)));
        if let Some(header) = &self.header {
            config = config.with_header(header.as_str());
        }
        config
    }
}

/// The directory holding the schema path.
fn default_target(schema: &Path) -> PathBuf {
    schema
        .canonicalize()
        .ok()
        .and_then(|path| path.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
