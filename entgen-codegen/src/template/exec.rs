use std::cell::Cell;

use log::trace;

use super::{
    Template, TemplateError, TemplateRegistry,
    parse::{Node, RangeTarget},
};
use crate::{
    decode::{DecodePlan, DecodeStrategy},
    graph::{Edge, Entity, Field, Graph},
};

/// Maximum nesting of template inclusions.
pub const MAX_DEPTH: usize = 32;

/// What a template is executed against.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    pub graph: &'a Graph,
    pub entity: Option<&'a Entity>,
    pub field: Option<&'a Field>,
    pub edge: Option<&'a Edge>,
}

impl<'a> Scope<'a> {
    /// Graph-wide scope with no entity selected.
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            entity: None,
            field: None,
            edge: None,
        }
    }

    pub fn with_entity(self, entity: &'a Entity) -> Self {
        Self {
            entity: Some(entity),
            field: None,
            edge: None,
            ..self
        }
    }

    pub fn with_field(self, field: &'a Field) -> Self {
        Self {
            field: Some(field),
            ..self
        }
    }

    pub fn with_edge(self, edge: &'a Edge) -> Self {
        Self {
            edge: Some(edge),
            ..self
        }
    }

    /// The entity in scope, or [`TemplateError::MissingEntity`].
    pub fn require_entity(&self, template: &str) -> Result<&'a Entity, TemplateError> {
        self.entity.ok_or_else(|| TemplateError::MissingEntity {
            template: template.to_string(),
        })
    }

    /// Decode plan of the entity in scope.
    pub fn decode_plan(&self, template: &str) -> Result<DecodePlan<'a>, TemplateError> {
        let entity = self.require_entity(template)?;
        DecodePlan::new(entity, self.graph.config().id_type).map_err(|source| {
            TemplateError::UnresolvedStrategy {
                template: template.to_string(),
                entity: entity.name.clone(),
                source,
            }
        })
    }

    fn lookup(&self, template: &str, path: &str) -> Result<String, TemplateError> {
        let unknown = || TemplateError::UnknownVariable {
            template: template.to_string(),
            name: path.to_string(),
        };
        let out_of_scope = |scope| TemplateError::OutOfScope {
            template: template.to_string(),
            name: path.to_string(),
            scope,
        };

        let config = self.graph.config();
        let (head, member) = match path.split_once('.') {
            Some((head, member)) => (head, member),
            None => {
                return match path {
                    "header" => Ok(config.header.clone()),
                    "package" => Ok(config.package.clone()),
                    "id_type" => Ok(config.id_type.to_string()),
                    _ => Err(unknown()),
                };
            }
        };

        match head {
            "entity" => {
                let entity = self.require_entity(template)?;
                Ok(match member {
                    "name" => entity.name.clone(),
                    "module" => entity.module(),
                    "plural" => entity.plural(),
                    "receiver" => entity.receiver(),
                    "table" => entity.table(),
                    "comment" => entity.comment.clone().unwrap_or_default(),
                    "scan" => entity.scan_name(),
                    "columns" => entity
                        .columns()
                        .iter()
                        .map(|c| format!("\"{c}\""))
                        .collect::<Vec<_>>()
                        .join(", "),
                    _ => return Err(unknown()),
                })
            }
            "field" => {
                let field = self.field.ok_or_else(|| out_of_scope("fields"))?;
                Ok(match member {
                    "name" => field.name.clone(),
                    "column" => field.column(),
                    "type" => field.ty.to_string(),
                    "optional" => field.optional.to_string(),
                    "nillable" => field.nillable.to_string(),
                    "unique" => field.unique.to_string(),
                    "comment" => field.comment.clone().unwrap_or_default(),
                    "json_type" => field.json_type.clone().unwrap_or_default(),
                    "enum_type" => field.enum_type.clone().unwrap_or_default(),
                    "strategy" => DecodeStrategy::resolve(field)
                        .map_err(|source| TemplateError::UnresolvedStrategy {
                            template: template.to_string(),
                            entity: self.entity.map(|e| e.name.clone()).unwrap_or_default(),
                            source,
                        })?
                        .to_string(),
                    _ => return Err(unknown()),
                })
            }
            "edge" => {
                let edge = self.edge.ok_or_else(|| out_of_scope("edges"))?;
                Ok(match member {
                    "name" => edge.name.clone(),
                    "target" => edge.target.clone(),
                    "owner" => edge.owner.clone(),
                    "rel" => edge.rel.to_string(),
                    "unique" => edge.unique.to_string(),
                    "inverse" => edge.inverse.clone().unwrap_or_default(),
                    "comment" => edge.comment.clone().unwrap_or_default(),
                    _ => return Err(unknown()),
                })
            }
            _ => Err(unknown()),
        }
    }
}

/// Executes registered templates against a graph.
#[derive(Debug)]
pub struct Emitter<'a> {
    graph: &'a Graph,
    registry: &'a TemplateRegistry,
    depth: Cell<usize>,
}

impl<'a> Emitter<'a> {
    pub fn new(graph: &'a Graph, registry: &'a TemplateRegistry) -> Self {
        Self {
            graph,
            registry,
            depth: Cell::new(0),
        }
    }

    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    pub fn registry(&self) -> &'a TemplateRegistry {
        self.registry
    }

    /// Execute template `name` for the whole graph.
    pub fn execute_graph(&self, name: &str) -> Result<String, TemplateError> {
        self.execute(name, &Scope::new(self.graph))
    }

    /// Execute template `name` for one entity.
    pub fn execute_entity(&self, name: &str, entity: &Entity) -> Result<String, TemplateError> {
        self.execute(name, &Scope::new(self.graph).with_entity(entity))
    }

    /// Execute template `name` in `scope`.
    pub fn execute(&self, name: &str, scope: &Scope<'_>) -> Result<String, TemplateError> {
        let template = self
            .registry
            .get(name)
            .ok_or_else(|| TemplateError::Undefined {
                name: name.to_string(),
            })?;

        let depth = self.depth.get();
        if depth >= MAX_DEPTH {
            return Err(TemplateError::RecursionLimit {
                name: name.to_string(),
                limit: MAX_DEPTH,
            });
        }
        trace!(
            "executing template '{name}'{}",
            scope
                .entity
                .map(|e| format!(" for {}", e.name))
                .unwrap_or_default()
        );

        self.depth.set(depth + 1);
        let result = match template {
            Template::Builtin(render) => render(self, scope),
            Template::Text(text) => {
                let mut out = String::new();
                self.render_nodes(name, &text.nodes, scope, &mut out)
                    .map(|()| out)
            }
        };
        self.depth.set(depth);
        result
    }

    fn render_nodes(
        &self,
        template: &str,
        nodes: &[Node],
        scope: &Scope<'_>,
        out: &mut String,
    ) -> Result<(), TemplateError> {
        for node in nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Var { path } => out.push_str(&scope.lookup(template, path)?),
                Node::Include { name } => out.push_str(&self.execute(name, scope)?),
                Node::Range { target, body } => match target {
                    RangeTarget::Fields => {
                        let entity = scope.require_entity(template)?;
                        for field in &entity.fields {
                            self.render_nodes(template, body, &scope.with_field(field), out)?;
                        }
                    }
                    RangeTarget::Edges => {
                        let entity = scope.require_entity(template)?;
                        for edge in &entity.edges {
                            self.render_nodes(template, body, &scope.with_edge(edge), out)?;
                        }
                    }
                    RangeTarget::Entities => {
                        for entity in self.graph.entities() {
                            let child = Scope::new(self.graph).with_entity(entity);
                            self.render_nodes(template, body, &child, out)?;
                        }
                    }
                },
            }
        }
        Ok(())
    }
}
