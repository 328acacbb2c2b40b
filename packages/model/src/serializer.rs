use tracing::instrument;

use crate::ast::{Document, Payload};
use crate::error::EncodeError;
use crate::wire::ConfigWire;

/// Encode a document to the YAML read by the Glance renderer.
///
/// Output is deterministic: ids are dropped, defaults are omitted, shared
/// widget fields come first followed by payload keys in insertion order, and
/// extra top-level keys follow `pages`.
#[instrument(skip_all, fields(pages = doc.pages.len()))]
pub fn encode(doc: &Document) -> Result<String, EncodeError> {
    let wire = ConfigWire::from(doc);
    Ok(serde_yaml::to_string(&wire)?)
}

/// Render a widget payload for the per-widget editor. Empty payloads render
/// as an empty string.
pub fn payload_to_text(payload: &Payload) -> Result<String, EncodeError> {
    if payload.is_empty() {
        return Ok(String::new());
    }
    Ok(serde_yaml::to_string(payload)?)
}
