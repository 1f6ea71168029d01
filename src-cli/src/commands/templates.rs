//! `storeterms templates`: describe the built-in templates.

use serde::Serialize;
use std::process::ExitCode;
use storeterms_core::DocumentKind;
use storeterms_delivery::file_name_for;
use storeterms_documents::DocumentTemplate;

#[derive(Debug, Serialize)]
struct TemplateInfo {
    kind: DocumentKind,
    title: &'static str,
    file_name: String,
    placeholders: Vec<&'static str>,
}

fn describe() -> Vec<TemplateInfo> {
    DocumentKind::ALL
        .into_iter()
        .map(|kind| TemplateInfo {
            kind,
            title: kind.title(),
            file_name: file_name_for(kind.title()),
            placeholders: DocumentTemplate::for_kind(kind)
                .placeholders()
                .iter()
                .map(|p| p.name())
                .collect(),
        })
        .collect()
}

/// Run the command.
pub fn run(json: bool) -> anyhow::Result<ExitCode> {
    let templates = describe();

    if json {
        println!("{}", serde_json::to_string_pretty(&templates)?);
    } else {
        for t in &templates {
            println!("{} ({})", t.title, t.kind.slug());
            println!("  file: {}", t.file_name);
            println!("  placeholders: {}", t.placeholders.join(", "));
        }
    }

    Ok(ExitCode::SUCCESS)
}
