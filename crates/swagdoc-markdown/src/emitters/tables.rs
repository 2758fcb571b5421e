use swagdoc_core::context::DocContext;
use swagdoc_core::parse::parameter::Parameter;
use swagdoc_core::parse::schema::Schema;

use crate::markdown::Table;

pub const TABLE_HEADER: [&str; 3] = ["Parameter", "Type", "Description"];

/// Trailing row of every query table.
pub const PAGINATION_ROW: [&str; 3] = [
    "&nbsp;",
    "&nbsp;",
    "[See search and pagination for more parameters](#search)",
];

/// Query parameters, required ones first, otherwise in declaration order.
pub fn query_table(params: &[&Parameter]) -> Option<Table> {
    if params.is_empty() {
        return None;
    }

    let mut sorted = params.to_vec();
    sorted.sort_by_key(|p| !p.required);

    let mut table = Table::new(&TABLE_HEADER);
    for param in sorted {
        table.push_row(vec![
            name_cell(&param.name, param.required),
            format!("`{}`", param.param_type.as_deref().unwrap_or_default()),
            param.description.clone().unwrap_or_default(),
        ]);
    }
    table.push_row(PAGINATION_ROW.iter().map(|c| c.to_string()).collect());
    Some(table)
}

/// Fields of the type a body parameter points at. `None` when the type isn't documented.
pub fn body_table(ctx: &DocContext<'_>, body: &Parameter) -> Option<Table> {
    let type_name = body.schema.as_ref()?.type_name()?;
    let Some(definition) = ctx.definition(type_name) else {
        log::debug!("body `{}` has undocumented type `{type_name}`", body.name);
        return None;
    };
    if definition.properties.is_empty() {
        return None;
    }

    let mut fields: Vec<(&str, &Schema, bool)> = definition
        .properties
        .iter()
        .map(|(name, field)| (name.as_str(), field, definition.is_required(name)))
        .collect();
    fields.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(b.0)));

    let mut table = Table::new(&TABLE_HEADER);
    for (name, field, required) in fields {
        table.push_row(vec![
            name_cell(name, required),
            field_type_cell(field),
            field.description.clone().unwrap_or_default(),
        ]);
    }
    Some(table)
}

fn name_cell(name: &str, required: bool) -> String {
    if required {
        format!("`{name}`")
    } else {
        format!("`{name} (optional)`")
    }
}

/// `` `string(64) email` `` for primitives, `` `Widget` `` for references.
pub fn field_type_cell(field: &Schema) -> String {
    match (&field.schema_type, field.ref_name()) {
        (Some(_), _) => format!("`{}`", primitive_label(field)),
        (None, Some(name)) => format!("`{name}`"),
        (None, None) => String::new(),
    }
}

/// The primitive type with its `(maxLength)` and `format` qualifiers.
pub fn primitive_label(field: &Schema) -> String {
    let mut label = field.schema_type.clone().unwrap_or_default();
    if let Some(max) = field.max_length {
        label.push_str(&format!("({max})"));
    }
    if let Some(ref format) = field.format {
        label.push(' ');
        label.push_str(format);
    }
    label
}
