use std::path::Path;

use chrono::NaiveDate;

use crate::cli::config::{AppConfig, FillArgs};
use crate::coerce::options::DropdownOptions;
use crate::error::{AutofillError, Result};
use crate::extract::extract_model::{DocumentRef, ExtractionResult};
use crate::extract::extractor::DocumentExtractor;
use crate::extract::http::HttpExtractor;
use crate::merge::form_state::InMemoryForm;
use crate::merge::policy::MergePolicy;
use crate::resolve::pipeline::ResolveContext;
use crate::schema::form_type::FormTypeId;
use crate::schema::taxonomy::TAXONOMY;
use crate::session::controller::AutoFillController;
use crate::session::session_model::{populated_message, SessionOutcome};
use crate::trace::logger::TraceLogger;

// ============================================================================
// resolve subcommand
// ============================================================================

/// Resolve a saved extraction JSON file into the form described by `fill`.
pub fn cmd_resolve(extraction_path: &str, fill: &FillArgs, config: &AppConfig) -> Result<String> {
    let text = read_file(extraction_path)?;
    let extraction = ExtractionResult::from_json_str(&text)?;
    let source = ExtractionSource::Ready(extraction);
    fill_form(source, fill, config)
}

// ============================================================================
// extract subcommand
// ============================================================================

/// Analyze a document through the HTTP extractor, then resolve the result.
pub fn cmd_extract(
    document_path: &str,
    endpoint: Option<&str>,
    fill: &FillArgs,
    config: &AppConfig,
) -> Result<String> {
    let document = DocumentRef::load(Path::new(document_path))?;
    let extractor = HttpExtractor::new(
        endpoint.unwrap_or(&config.extractor.endpoint),
        config.extractor.timeout_secs,
    );
    let source = ExtractionSource::Extractor {
        extractor: &extractor,
        document: &document,
    };
    fill_form(source, fill, config)
}

// ============================================================================
// taxonomy / aliases subcommands
// ============================================================================

pub fn cmd_taxonomy() -> String {
    let mut out = String::new();
    let mut current_category = "";

    for entry in TAXONOMY {
        if entry.category != current_category {
            out.push_str(entry.category);
            out.push('\n');
            current_category = entry.category;
        }
        out.push_str(&format!("  {} -> {}\n", entry.subcategory, entry.form_type));
    }

    out
}

pub fn cmd_aliases(form_type: &str) -> Result<String> {
    let form_type: FormTypeId = form_type
        .parse()
        .map_err(|e: crate::schema::form_type::UnknownFormType| {
            AutofillError::InvalidArgument(e.to_string())
        })?;
    let schema = form_type.schema();

    let mut out = format!("{}\n", form_type);
    for field in schema.fields {
        let aliases: Vec<&str> = schema.aliases_for(field.key).collect();
        out.push_str(&format!(
            "  {} ({}): {}\n",
            field.key,
            field.kind.name(),
            aliases.join(", ")
        ));
    }

    Ok(out)
}

// ============================================================================
// Shared fill flow
// ============================================================================

enum ExtractionSource<'a> {
    Ready(ExtractionResult),
    Extractor {
        extractor: &'a dyn DocumentExtractor,
        document: &'a DocumentRef,
    },
}

fn fill_form(source: ExtractionSource<'_>, fill: &FillArgs, config: &AppConfig) -> Result<String> {
    let mut form = match &fill.form {
        Some(path) => load_form(path)?,
        None => InMemoryForm::new(),
    };
    let options = match &fill.options {
        Some(path) => load_options(path)?,
        None => DropdownOptions::new(),
    };
    let today = parse_today(fill.today.as_deref())?;

    let tracer = if config.trace.enabled {
        TraceLogger::new(&config.trace.path)
    } else {
        TraceLogger::disabled()
    };
    let policy = MergePolicy::from_overwrite(fill.overwrite || config.merge.overwrite);
    let mut controller = AutoFillController::new(tracer).with_policy(policy);

    let Some(ticket) = controller.begin_extraction(&fill.category, &fill.subcategory) else {
        return Ok(format!(
            "No form type for '{}' / '{}'; auto-fill skipped\n",
            fill.category, fill.subcategory
        ));
    };

    let extraction = match source {
        ExtractionSource::Ready(extraction) => extraction,
        ExtractionSource::Extractor { extractor, document } => match extractor.extract(document) {
            Ok(extraction) => extraction,
            Err(e) => {
                controller.fail_extraction(ticket);
                return Err(e);
            }
        },
    };

    let ctx = ResolveContext {
        options: &options,
        today,
    };
    let outcome = controller.complete_extraction(ticket, extraction, &ctx, &mut form);

    if let Some(path) = &fill.output {
        let json = serde_json::to_string_pretty(&form)
            .map_err(|e| AutofillError::json("merged form", e))?;
        std::fs::write(path, json).map_err(|e| AutofillError::io(path, e))?;
    }

    Ok(format_session_report(ticket.form_type, &outcome, &controller, &form))
}

/// Human-readable summary of one session: what was written, what is
/// highlighted, and the notification line.
pub fn format_session_report(
    form_type: FormTypeId,
    outcome: &SessionOutcome,
    controller: &AutoFillController,
    form: &InMemoryForm,
) -> String {
    let mut out = format!("Form type: {}\n", form_type);

    for key in controller.highlights().keys() {
        let value = form
            .get(key)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "null".to_string());
        out.push_str(&format!("  * {} = {}\n", key, value));
    }

    out.push_str(&populated_message(outcome.populated()));
    out.push('\n');
    out
}

// ============================================================================
// Helpers
// ============================================================================

fn read_file(path: &str) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| AutofillError::io(path, e))
}

/// Load current form values from a JSON object file.
pub fn load_form(path: &str) -> Result<InMemoryForm> {
    let text = read_file(path)?;
    serde_json::from_str(&text).map_err(|e| AutofillError::json(format!("form {}", path), e))
}

/// Load dropdown option sets from YAML (`.yaml`/`.yml`) or JSON.
pub fn load_options(path: &str) -> Result<DropdownOptions> {
    let text = read_file(path)?;
    let is_yaml = Path::new(path)
        .extension()
        .is_some_and(|e| e == "yaml" || e == "yml");

    if is_yaml {
        serde_yaml::from_str(&text).map_err(|e| AutofillError::Yaml {
            context: format!("options {}", path),
            source: e,
        })
    } else {
        serde_json::from_str(&text)
            .map_err(|e| AutofillError::json(format!("options {}", path), e))
    }
}

/// `YYYY-MM-DD`, or the local calendar date when absent.
pub fn parse_today(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| {
            AutofillError::InvalidArgument(format!("--today expects YYYY-MM-DD, got '{}'", text))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
