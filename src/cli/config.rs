use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::extract::http::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "record-autofill",
    version,
    about = "Resolve document extraction output into record forms"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: record-autofill.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a saved extraction result (JSON) into a form
    Resolve {
        /// Path to the extraction result JSON
        #[arg(long)]
        extraction: String,

        #[command(flatten)]
        fill: FillArgs,
    },

    /// Send a document to the extraction service, then resolve the result
    Extract {
        /// Path to the document to analyze
        #[arg(long)]
        document: String,

        /// Extraction service endpoint (overrides config)
        #[arg(long)]
        endpoint: Option<String>,

        #[command(flatten)]
        fill: FillArgs,
    },

    /// List category / subcategory pairs and the form type each opens
    Taxonomy,

    /// Show a form type's fields, kinds and label aliases
    Aliases {
        /// Form type identifier, e.g. conference_presentation
        #[arg(long)]
        form_type: String,
    },
}

/// Arguments shared by every command that fills a form.
#[derive(Args, Debug, Clone)]
pub struct FillArgs {
    /// Record category, e.g. "Research"
    #[arg(long)]
    pub category: String,

    /// Record subcategory, e.g. "Paper Presented in Conference"
    #[arg(long)]
    pub subcategory: String,

    /// Current form values as a JSON object (default: empty form)
    #[arg(long)]
    pub form: Option<String>,

    /// Dropdown option sets per enumerated field (YAML or JSON)
    #[arg(long)]
    pub options: Option<String>,

    /// Overwrite fields that already hold a value
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Evaluation date for the no-future-dates rule (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub today: Option<String>,

    /// Write the merged form JSON here
    #[arg(short, long)]
    pub output: Option<String>,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `record-autofill.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub extractor: ExtractorConfig,
    #[serde(default)]
    pub merge: MergeConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergeConfig {
    #[serde(default)]
    pub overwrite: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_trace_path")]
    pub path: String,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "autofill_trace.jsonl".to_string(),
        }
    }
}

// Serde default helpers
fn default_endpoint() -> String { DEFAULT_ENDPOINT.to_string() }
fn default_timeout() -> u64 { DEFAULT_TIMEOUT_SECS }
fn default_true() -> bool { true }
fn default_trace_path() -> String { "autofill_trace.jsonl".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("record-autofill.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = config_path, error = %e, "malformed config, using defaults");
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Logging
// ============================================================================

/// Install the stderr `tracing` subscriber. `RUST_LOG` wins over `-v`.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
