use constel_parser::Document;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("YAML rendering failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render a document as a YAML mapping, one entry per declaration in
/// source order. Shadowed names each keep their own entry; UTF-8 text is
/// written verbatim.
pub fn emit_yaml(document: &Document) -> Result<String, EmitError> {
    Ok(serde_yaml::to_string(document)?)
}

/// Render a document as pretty-printed JSON, same ordering rules as YAML.
pub fn emit_json(document: &Document) -> Result<String, EmitError> {
    Ok(serde_json::to_string_pretty(document)?)
}
