//! Generate operation - code generation from a schema graph.

use entgen_codegen::{graph::Graph, language::LanguageCodegen};
use entgen_codegen_rust::Generator;
use eyre::{Context, Result};

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Execute the generate operation.
///
/// Every file is rendered before anything is written, so a failure leaves
/// the target directory untouched.
pub fn generate(graph: &Graph, dry_run: bool) -> Result<GenerateReport> {
    let generator = Generator::new(graph)?;

    let result = if dry_run {
        let files = generator
            .preview()?
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let target = &graph.config().target;
        let files = generator
            .generate(target)
            .wrap_err("failed to generate code")?;
        GenerationResult::Written(WrittenResult {
            output_dir: target.clone(),
            files,
        })
    };

    Ok(GenerateReport {
        entities: graph.entities().map(|e| e.name.clone()).collect(),
        id_type: graph.config().id_type.to_string(),
        result,
    })
}
