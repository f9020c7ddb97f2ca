use std::collections::HashSet;

use indexmap::IndexMap;
use log::debug;

use entgen_core::is_rust_keyword;

use super::{Emitter, Scope, TemplateError, TextTemplate};

/// Signature of a built-in template.
pub type BuiltinFn = fn(&Emitter<'_>, &Scope<'_>) -> Result<String, TemplateError>;

/// A registered template body.
#[derive(Clone)]
pub enum Template {
    Builtin(BuiltinFn),
    Text(TextTemplate),
}

impl std::fmt::Debug for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Template::Builtin(_) => f.write_str("Builtin"),
            Template::Text(text) => f.debug_tuple("Text").field(&text.source_name()).finish(),
        }
    }
}

/// Named templates in registration order.
///
/// Registering an existing name replaces its body but keeps its position.
/// Names first registered as built-ins stay built-in names even when a text
/// template overrides them; every other name is an extra.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: IndexMap<String, Template>,
    builtins: HashSet<String>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_builtin(&mut self, name: impl Into<String>, template: BuiltinFn) {
        let name = name.into();
        self.builtins.insert(name.clone());
        self.insert(name, Template::Builtin(template));
    }

    pub fn register_text(&mut self, template: TextTemplate) {
        self.insert(template.name().to_string(), Template::Text(template));
    }

    /// Parse `text` and register every template it defines. Nothing is
    /// registered when parsing fails.
    pub fn parse(
        &mut self,
        source_name: &str,
        stem: &str,
        text: &str,
    ) -> Result<Vec<String>, TemplateError> {
        let templates = TextTemplate::parse_all(source_name, stem, text)?;
        let names = templates.iter().map(|t| t.name().to_string()).collect();
        for template in templates {
            self.register_text(template);
        }
        Ok(names)
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtins.contains(name)
    }

    /// All template names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Names of templates that are not built-in, in registration order.
    pub fn extras(&self) -> impl Iterator<Item = &str> {
        self.names().filter(|name| !self.is_builtin(name))
    }

    /// Extra template names checked as module stems, failing on the first
    /// name that cannot be written as `<name>.<ext>` beside the entity files.
    pub fn extra_modules(&self) -> Result<Vec<&str>, TemplateError> {
        self.extras()
            .map(|name| match module_name_error(name) {
                Some(reason) => Err(TemplateError::InvalidModuleName {
                    name: name.to_string(),
                    reason,
                }),
                None => Ok(name),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    fn insert(&mut self, name: String, template: Template) {
        if let Some(previous) = self.templates.insert(name.clone(), template) {
            match previous {
                Template::Builtin(_) => debug!("template '{name}' overrides the built-in"),
                Template::Text(text) => debug!(
                    "template '{name}' overrides the definition from {}",
                    text.source_name()
                ),
            }
        }
    }
}

fn module_name_error(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Some("name is empty"),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            return Some("must start with a letter or underscore");
        }
        Some(_) => {}
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("only letters, digits and underscores are allowed");
    }
    if is_rust_keyword(name) {
        return Some("name is a reserved word");
    }
    None
}
