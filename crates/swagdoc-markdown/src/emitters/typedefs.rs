use std::collections::BTreeSet;

use swagdoc_core::context::DocContext;
use swagdoc_core::grouping::ResourceGroup;
use swagdoc_core::parse::schema::{Schema, ref_name};

use super::tables::{TABLE_HEADER, primitive_label};
use crate::markdown::{Block, Document, Table};

/// Every distinct `$ref` reachable from a 2xx response schema, sorted.
pub fn collect_return_refs(groups: &[ResourceGroup<'_>]) -> Vec<String> {
    let refs: BTreeSet<&str> = groups
        .iter()
        .flat_map(|g| g.endpoints.iter())
        .filter_map(|e| e.operation.responses.as_ref())
        .flat_map(|responses| responses.iter())
        .filter(|(code, _)| code.starts_with('2'))
        .filter_map(|(_, response)| response.schema.as_ref()?.reachable_ref())
        .collect();

    refs.into_iter().map(String::from).collect()
}

/// Render the aggregate `Type Definitions` page.
pub fn emit_typedefs(ctx: &DocContext<'_>, refs: &[String]) -> String {
    let mut doc = Document::new();
    doc.push(Block::heading(2, "Type Definitions"));

    for reference in refs {
        let Some(name) = ref_name(reference) else {
            continue;
        };
        doc.push(Block::heading(3, format!("{name} Model")));

        match ctx.definition(name) {
            Some(definition) => doc.push(Block::Table(definition_table(definition))),
            None => log::warn!("response references unknown type `{reference}`"),
        }
    }

    doc.render()
}

fn definition_table(definition: &Schema) -> Table {
    let mut table = Table::new(&TABLE_HEADER);
    for (name, field) in &definition.properties {
        table.push_row(vec![
            format!("`{name}`"),
            linked_type_cell(field),
            field.description.clone().unwrap_or_default(),
        ]);
    }
    table
}

/// Anchor of a model heading on the type definitions page.
pub fn model_anchor(name: &str) -> String {
    format!("#{}-model", name.to_lowercase())
}

fn model_link(name: &str) -> String {
    format!("[`{name}`]({})", model_anchor(name))
}

fn linked_type_cell(field: &Schema) -> String {
    if field.schema_type.is_some() {
        let label = format!("`{}`", primitive_label(field));
        return match field.items.as_ref().and_then(|i| i.ref_name()) {
            Some(item) => format!("{label} of {}", model_link(item)),
            None => label,
        };
    }
    field.ref_name().map(model_link).unwrap_or_default()
}
