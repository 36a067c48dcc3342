use crate::fields::{DocumentFields, FieldName};
use crate::theme::Theme;

/// Renders the fixed README skeleton. Field values are inserted verbatim and
/// empty sections are kept.
pub fn render(fields: &DocumentFields) -> String {
    let mut out = format!("# {}\n", fields.get(FieldName::ProjectName));

    for (field, value) in fields.iter() {
        if let Some(heading) = field.heading() {
            out.push_str(&format!("\n## {}\n{}\n", heading, value));
        }
    }

    out
}

/// Terminal rendition of an already rendered document. Display only.
pub fn preview(document: &str, theme: &Theme) -> String {
    document
        .lines()
        .map(|line| {
            if line.starts_with("## ") {
                theme.section.apply(line).to_string()
            } else if line.starts_with("# ") {
                theme.title.apply(line).to_string()
            } else {
                theme.body.apply(line).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
