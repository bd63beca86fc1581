//! helptree CLI library: load a graph file, validate it, render prompts.
//!
//! Graph files are JSON or YAML, picked by extension. The binary in
//! `main.rs` wires these into the `run` and `check` subcommands.

use std::path::Path;

use thiserror::Error;

use helptree::{Graph, GraphError, Prompt};

/// CLI-level failure: reading, parsing, or validating a graph file.
#[derive(Debug, Error)]
pub enum CliError {
    /// The graph file could not be read.
    #[error("failed to read graph file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// The file extension is not one of .json, .yaml, .yml.
    #[error("unsupported graph file extension {0:?} (expected .json, .yaml, or .yml)")]
    UnsupportedExtension(String),

    /// The file content is not a valid JSON graph.
    #[error("failed to parse JSON graph: {0}")]
    Json(#[from] serde_json::Error),

    /// The file content is not a valid YAML graph.
    #[error("failed to parse YAML graph: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The graph parsed but failed integrity validation.
    #[error("graph failed validation: {0}")]
    Invalid(#[from] GraphError),
}

/// Loads a graph from a JSON or YAML file, picking the parser by extension.
pub fn load_graph(path: &Path) -> Result<Graph, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let graph = match ext.as_str() {
        "json" => serde_json::from_str(&content)?,
        "yaml" | "yml" => serde_yaml::from_str(&content)?,
        other => return Err(CliError::UnsupportedExtension(other.to_string())),
    };
    tracing::info!(path = %path.display(), "Graph file loaded");
    Ok(graph)
}

/// Loads and validates a graph file; Ok means the file both parses and has
/// full referential integrity.
pub fn check_graph(path: &Path) -> Result<Graph, CliError> {
    let graph = load_graph(path)?;
    graph.validate()?;
    Ok(graph)
}

/// Renders a prompt for terminal output: text as-is, rich content as compact
/// JSON.
pub fn render_prompt(prompt: &Prompt) -> String {
    match prompt {
        Prompt::Text(s) => s.clone(),
        Prompt::Rendered(value) => value.to_string(),
    }
}
