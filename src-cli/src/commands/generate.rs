//! `storeterms generate`: validate merchant input, render and deliver.

use crate::cli::GenerateArgs;
use crate::error::CommandError;
use anyhow::Context;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use storeterms_core::{
    AppConfig, AsOfDate, ConfigError, ConfigResult, DocumentKind, DocumentsConfig,
    MerchantProfile, ProfileInput, RenderedDocument, ValidationError,
};
use storeterms_delivery::{Artifact, Page};
use storeterms_documents::TemplateError;
use tracing::{error, info, warn};

/// Result of rendering every selected document.
///
/// Documents render independently; one failing leaves the others intact.
#[derive(Debug, Default)]
pub struct RenderOutcome {
    /// Successfully rendered documents, in display order
    pub documents: Vec<RenderedDocument>,
    /// Documents that could not be rendered
    pub failures: Vec<(DocumentKind, TemplateError)>,
}

/// Merge the profile file, flags and config defaults into one input.
///
/// Flags win over the file; the config default refund window applies only
/// when neither supplies one.
pub fn collect_input(args: &GenerateArgs, config: &AppConfig) -> ConfigResult<ProfileInput> {
    let mut input = match &args.profile {
        Some(path) => ProfileInput::from_toml_file(path)?,
        None => ProfileInput::default(),
    };

    let overrides = [
        (&args.company_name, &mut input.name),
        (&args.contact_email, &mut input.contact_email),
        (&args.website_url, &mut input.website_url),
        (&args.jurisdiction, &mut input.jurisdiction),
        (&args.privacy_email, &mut input.privacy_email),
    ];
    for (flag, field) in overrides {
        if let Some(value) = flag {
            field.clone_from(value);
        }
    }

    input.refund_window_days = args
        .refund_days
        .or(input.refund_window_days)
        .or(Some(config.defaults.refund_window_days));

    Ok(input)
}

/// Apply `--no-*` flags on top of the configured selection.
#[must_use]
pub fn selection(args: &GenerateArgs, config: &AppConfig) -> DocumentsConfig {
    let mut documents = config.documents.clone();
    if args.no_return_policy {
        documents.set_enabled(DocumentKind::ReturnPolicy, false);
    }
    if args.no_privacy_policy {
        documents.set_enabled(DocumentKind::PrivacyPolicy, false);
    }
    if args.no_terms {
        documents.set_enabled(DocumentKind::TermsConditions, false);
    }
    documents
}

/// Render every selected document for `profile`.
#[must_use]
pub fn render_selected(
    profile: &MerchantProfile,
    documents: &DocumentsConfig,
    as_of: AsOfDate,
) -> RenderOutcome {
    let mut outcome = RenderOutcome::default();

    for kind in documents.selected() {
        match storeterms_documents::render(kind, profile, as_of) {
            Ok(doc) => outcome
                .documents
                .push(doc.with_title(documents.title_for(kind))),
            Err(e) => {
                error!(kind = kind.slug(), error = %e, "failed to render document");
                outcome.failures.push((kind, e));
            }
        }
    }

    outcome
}

#[derive(Debug, Serialize)]
struct DocumentSummary {
    kind: DocumentKind,
    title: String,
    file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<PathBuf>,
    bytes: usize,
}

#[derive(Debug, Serialize)]
struct FailureSummary {
    kind: DocumentKind,
    error: CommandError,
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    as_of: String,
    documents: Vec<DocumentSummary>,
    failures: Vec<FailureSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<PathBuf>,
}

/// Run the command.
pub fn run(args: &GenerateArgs, config_path: Option<&Path>) -> anyhow::Result<ExitCode> {
    let config = match super::load_config(config_path) {
        Ok(config) => config,
        Err(e) => return report_config_error(e, "failed to load config", args.json),
    };
    let input = match collect_input(args, &config) {
        Ok(input) => input,
        Err(e) => return report_config_error(e, "failed to load merchant profile", args.json),
    };

    let validated = args
        .date
        .as_deref()
        .map_or_else(|| Ok(AsOfDate::today()), AsOfDate::parse)
        .and_then(|as_of| input.validate().map(|profile| (profile, as_of)));
    let (profile, as_of) = match validated {
        Ok(ok) => ok,
        Err(e) => return Ok(report_invalid(&e, args.json)),
    };

    let outcome = render_selected(&profile, &selection(args, &config), as_of);
    let mut summary = Summary {
        as_of: as_of.long_format(),
        ..Summary::default()
    };
    for (kind, e) in &outcome.failures {
        summary.failures.push(FailureSummary {
            kind: *kind,
            error: e.into(),
        });
    }

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output.directory.clone());
    let mut page = Page::new();
    let mut stdout = std::io::stdout().lock();

    for doc in &outcome.documents {
        let artifact = match Artifact::from_document(doc) {
            Ok(artifact) => artifact,
            Err(e) => {
                warn!(kind = doc.kind.slug(), error = %e, "cannot package document");
                summary.failures.push(FailureSummary {
                    kind: doc.kind,
                    error: (&e).into(),
                });
                continue;
            }
        };

        let path = if args.stdout {
            if !summary.documents.is_empty() {
                writeln!(stdout, "\n---\n")?;
            }
            write!(stdout, "{}", artifact.text())?;
            None
        } else {
            match artifact.write_to(&output_dir) {
                Ok(path) => Some(path),
                Err(e) => {
                    error!(kind = doc.kind.slug(), error = %e, "failed to write document");
                    summary.failures.push(FailureSummary {
                        kind: doc.kind,
                        error: (&e).into(),
                    });
                    continue;
                }
            }
        };

        summary.documents.push(DocumentSummary {
            kind: doc.kind,
            title: artifact.title().to_string(),
            file_name: artifact.file_name().to_string(),
            path,
            bytes: artifact.bytes().len(),
        });
        page.push(artifact);
    }

    if args.stdout && !summary.documents.is_empty() {
        writeln!(stdout)?;
    }

    if !args.stdout && (args.page || config.output.write_page) {
        let path = page
            .write_to(&output_dir)
            .context("failed to write page")?;
        summary.page = Some(path);
    }

    info!(
        documents = summary.documents.len(),
        failures = summary.failures.len(),
        "generation finished"
    );

    if args.json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else if !args.stdout {
        for doc in &summary.documents {
            if let Some(path) = &doc.path {
                writeln!(stdout, "{}: {}", doc.title, path.display())?;
            }
        }
        if let Some(path) = &summary.page {
            writeln!(stdout, "Page: {}", path.display())?;
        }
        for failure in &summary.failures {
            eprintln!("{}: {}", failure.kind, failure.error.message);
        }
    }

    Ok(if summary.failures.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_json_error(command_error: &CommandError) {
    let body = serde_json::json!({ "error": command_error });
    println!("{body:#}");
}

/// Under `--json` the error goes to stdout like every other outcome.
fn report_config_error(err: ConfigError, context: &str, json: bool) -> anyhow::Result<ExitCode> {
    if json {
        error!(error = %err, "{context}");
        print_json_error(&CommandError::from(&err));
        return Ok(ExitCode::FAILURE);
    }
    Err(anyhow::Error::new(err).context(context.to_string()))
}

fn report_invalid(err: &ValidationError, json: bool) -> ExitCode {
    let command_error = CommandError::from(err);
    if json {
        print_json_error(&command_error);
    } else {
        eprintln!("{}", command_error.message);
        if matches!(err, ValidationError::MissingField { .. }) {
            eprintln!("Error: {err}");
        }
    }
    ExitCode::FAILURE
}
