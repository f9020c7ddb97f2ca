//! Plain-text description of a graph, one table pair per entity.

use std::fmt::Write;

use super::{Entity, Graph};

impl Graph {
    /// Render the fields and edges of every entity as text tables.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for entity in self.entities() {
            describe_entity(&mut out, entity);
        }
        out
    }
}

fn describe_entity(out: &mut String, entity: &Entity) {
    let _ = writeln!(out, "{}:", entity.name);

    let mut fields = Table::new(["Field", "Type", "Unique", "Optional", "Nillable"]);
    for field in std::iter::once(&entity.id).chain(&entity.fields) {
        let ty = match (&field.json_type, &field.enum_type) {
            (Some(json), _) => format!("{} ({json})", field.ty),
            (None, Some(enum_type)) => format!("{} ({enum_type})", field.ty),
            _ => field.ty.to_string(),
        };
        fields.row([
            field.name.clone(),
            ty,
            field.unique.to_string(),
            field.optional.to_string(),
            field.nillable.to_string(),
        ]);
    }
    fields.render(out);

    if entity.has_edges() {
        let mut edges = Table::new(["Edge", "Type", "Inverse", "Relation", "Unique"]);
        for edge in &entity.edges {
            edges.row([
                edge.name.clone(),
                edge.target.clone(),
                edge.inverse.clone().unwrap_or_default(),
                edge.rel.to_string(),
                edge.unique.to_string(),
            ]);
        }
        edges.render(out);
    }
    out.push('\n');
}

struct Table<const N: usize> {
    header: [String; N],
    rows: Vec<[String; N]>,
}

impl<const N: usize> Table<N> {
    fn new(header: [&str; N]) -> Self {
        Self {
            header: header.map(str::to_string),
            rows: Vec::new(),
        }
    }

    fn row(&mut self, row: [String; N]) {
        self.rows.push(row);
    }

    fn render(&self, out: &mut String) {
        let mut widths = self.header.each_ref().map(String::len);
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        let separator = || {
            let mut line = String::from("+");
            for width in &widths {
                line.push_str(&"-".repeat(width + 2));
                line.push('+');
            }
            line
        };
        let line = |cells: &[String; N]| {
            let mut line = String::from("|");
            for (cell, width) in cells.iter().zip(&widths) {
                let _ = write!(line, " {cell:<width$} |");
            }
            line
        };

        let _ = writeln!(out, "\t{}", separator());
        let _ = writeln!(out, "\t{}", line(&self.header));
        let _ = writeln!(out, "\t{}", separator());
        for row in &self.rows {
            let _ = writeln!(out, "\t{}", line(row));
        }
        let _ = writeln!(out, "\t{}", separator());
    }
}
