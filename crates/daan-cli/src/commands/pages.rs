// File: src/commands/pages.rs
// Purpose: `daan pages`: list every form page and its fields

use anyhow::Result;
use daan_forms::{FieldKind, FieldSpec, FormSchema, PageKind, Requirement};

fn kind_label(field: &FieldSpec) -> &'static str {
    match field.kind {
        FieldKind::Text => "text",
        FieldKind::Secret => "secret",
        FieldKind::Choice { .. } => "choice",
        FieldKind::Flag => "flag",
        FieldKind::File => "file",
    }
}

fn requirement_label(field: &FieldSpec) -> &'static str {
    match field.requirement {
        Requirement::Required => "required",
        Requirement::Optional => "optional",
        Requirement::Gate => "gate",
        Requirement::None => "-",
    }
}

pub fn describe(schema: &FormSchema) -> String {
    let mut out = format!(
        "{} ({:?}): {}\n",
        schema.page,
        schema.flow,
        schema.title
    );
    for field in schema.shared {
        out.push_str(&format!(
            "    {:<20} {:<7} {}\n",
            field.name,
            kind_label(field),
            requirement_label(field)
        ));
    }
    for (index, step) in schema.steps.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", index + 1, step.title));
        for field in step.fields {
            out.push_str(&format!(
                "    {:<20} {:<7} {}\n",
                field.name,
                kind_label(field),
                requirement_label(field)
            ));
        }
    }
    out
}

pub fn run() -> Result<()> {
    for page in PageKind::ALL {
        println!("{}", describe(page.schema()));
    }
    Ok(())
}
