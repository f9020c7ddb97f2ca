use entgen_codegen::{
    generation::{FileEntry, FileRegistry},
    graph::Graph,
    language::LanguageCodegen,
    template::{Emitter, TemplateRegistry},
};
use eyre::{Result, WrapErr};
use log::debug;

use crate::templates::{ENTITY, MODULE, builtin_templates};

/// Rust code generator producing one module per entity plus `mod.rs`.
pub struct Generator<'a> {
    graph: &'a Graph,
    templates: TemplateRegistry,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn render(&self) -> Result<FileRegistry> {
        let emitter = Emitter::new(self.graph, &self.templates);
        let mut files = FileRegistry::new();

        for entity in self.graph.entities() {
            let content = emitter
                .execute_entity(ENTITY, entity)
                .wrap_err_with(|| format!("failed to generate entity '{}'", entity.name))?;
            files.register(FileEntry::entity(self.file_name(&entity.module()), content))?;
        }

        for name in self.templates.extra_modules()? {
            let content = emitter
                .execute_graph(name)
                .wrap_err_with(|| format!("failed to execute template '{name}'"))?;
            files.register(FileEntry::template(self.file_name(name), content))?;
        }

        let module = emitter
            .execute_graph(MODULE)
            .wrap_err("failed to generate the module file")?;
        files.register(FileEntry::module(self.file_name("mod"), module))?;

        debug!("rendered {} files", files.len());
        Ok(files)
    }
}

impl<'a> Generator<'a> {
    /// Create a generator with the built-in templates, overridden by the
    /// template sources configured on the graph.
    pub fn new(graph: &'a Graph) -> Result<Self> {
        let mut templates = builtin_templates();
        for path in &graph.config().templates {
            templates
                .load_path(path)
                .wrap_err_with(|| format!("failed to load templates from {}", path.display()))?;
        }
        Ok(Self::with_templates(graph, templates))
    }

    /// Create a generator with an already populated registry.
    pub fn with_templates(graph: &'a Graph, templates: TemplateRegistry) -> Self {
        Self { graph, templates }
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    fn file_name(&self, stem: &str) -> String {
        format!("{stem}.{}", self.file_extension())
    }
}

#[cfg(test)]
mod tests {
    use entgen_codegen::generation::FileCategory;
    use entgen_core::IdType;

    use super::*;
    use crate::templates::fixtures;

    #[test]
    fn test_render_files_in_category_order() {
        let graph = fixtures::graph(IdType::String);
        let generator = Generator::new(&graph).unwrap();
        let files = generator.render().unwrap();

        let paths: Vec<_> = files.entries().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["user.rs", "pet.rs", "mod.rs"]);
        assert_eq!(files.get("mod.rs").unwrap().category, FileCategory::Module);
    }

    #[test]
    fn test_render_is_deterministic() {
        let graph = fixtures::graph(IdType::Int64);
        let first = Generator::new(&graph).unwrap().render().unwrap();
        let second = Generator::new(&graph).unwrap().render().unwrap();

        let contents = |files: &FileRegistry| {
            files
                .entries()
                .map(|e| (e.path.clone(), e.content.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(contents(&first), contents(&second));
    }

    #[test]
    fn test_extra_templates_become_files() {
        let graph = fixtures::graph(IdType::String);
        let mut templates = builtin_templates();
        templates
            .parse(
                "tables.tmpl",
                "tables",
                "// {{ package }}{{ range entities }} {{ entity.table }}{{ end }}\n",
            )
            .unwrap();

        let files = Generator::with_templates(&graph, templates).render().unwrap();
        let tables = files.get("tables.rs").unwrap();
        assert_eq!(tables.content, "// ent users pets\n");
        assert_eq!(tables.category, FileCategory::Template);
    }

    #[test]
    fn test_extra_template_name_must_be_a_module() {
        let graph = fixtures::graph(IdType::String);
        let mut templates = builtin_templates();
        templates
            .parse("hooks.tmpl", "hooks", "{{ define \"../hooks\" }}// hooks{{ end }}")
            .unwrap();

        let err = Generator::with_templates(&graph, templates)
            .render()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "template '../hooks' cannot name an output module: must start with a letter or underscore"
        );
    }

    #[test]
    fn test_failing_template_renders_nothing() {
        let graph = fixtures::graph(IdType::String);
        let mut templates = builtin_templates();
        templates
            .parse("scan.tmpl", "scan", "{{ entity.nope }}")
            .unwrap();

        let err = Generator::with_templates(&graph, templates)
            .render()
            .unwrap_err();
        assert!(err.to_string().contains("failed to generate entity 'User'"));
    }
}
