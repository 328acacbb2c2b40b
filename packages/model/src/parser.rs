//! YAML → document decoding.
//!
//! Text is parsed into a `serde_yaml::Value` first and converted to the JSON
//! value model explicitly, so YAML-only values (`.inf`, `.nan`, complex keys)
//! are rejected with a location instead of silently becoming `null`.

use serde_json::{Number, Value};
use serde_yaml::Value as Yaml;
use tracing::{debug, instrument};

use crate::ast::{Document, Page, Payload};
use crate::error::{FormatError, FormatResult, PayloadFormatError};
use crate::wire::{PageWire, SHARED_WIDGET_KEYS};

/// A YAML value with no JSON counterpart, and where it was found
#[derive(Debug)]
struct UnsupportedValue {
    location: String,
    message: String,
}

impl UnsupportedValue {
    fn new(location: &str, message: String) -> Self {
        Self {
            location: location.to_string(),
            message,
        }
    }
}

fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn convert_number(number: &serde_yaml::Number) -> Option<Value> {
    if let Some(i) = number.as_i64() {
        return Some(i.into());
    }
    if let Some(u) = number.as_u64() {
        return Some(u.into());
    }
    number.as_f64().and_then(Number::from_f64).map(Value::Number)
}

fn convert_key(key: Yaml, path: &str) -> Result<String, UnsupportedValue> {
    match key {
        Yaml::String(key) => Ok(key),
        Yaml::Bool(flag) => Ok(flag.to_string()),
        Yaml::Number(number) => Ok(number.to_string()),
        _ => Err(UnsupportedValue::new(
            path,
            "mapping keys must be strings, numbers or booleans".to_string(),
        )),
    }
}

/// Convert a parsed YAML tree into the JSON value model. Tags are dropped.
fn to_json(value: Yaml, path: &str) -> Result<Value, UnsupportedValue> {
    Ok(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(flag) => Value::Bool(flag),
        Yaml::Number(number) => convert_number(&number).ok_or_else(|| {
            UnsupportedValue::new(path, format!("non-finite number {number} is not supported"))
        })?,
        Yaml::String(text) => Value::String(text),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| to_json(item, &format!("{path}[{index}]")))
                .collect::<Result<_, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut object = Payload::new();
            for (key, item) in mapping {
                let key = convert_key(key, path)?;
                let item = to_json(item, &child_path(path, &key))?;
                object.insert(key, item);
            }
            Value::Object(object)
        }
        Yaml::Tagged(tagged) => to_json(tagged.value, path)?,
    })
}

/// Decode a full configuration.
///
/// Every page, column and widget gets a freshly minted id; ids are never read
/// from the text. Top-level keys other than `pages` are kept verbatim in
/// [`Document::extra`].
#[instrument(skip_all, fields(bytes = source.len()))]
pub fn decode(source: &str) -> FormatResult<Document> {
    let parsed: Yaml =
        serde_yaml::from_str(source).map_err(|e| FormatError::syntax(e.to_string()))?;
    let parsed = to_json(parsed, "")
        .map_err(|e| FormatError::invalid_structure(e.location, e.message))?;

    let Value::Object(root) = parsed else {
        return Err(FormatError::NotAnObject);
    };

    let mut pages = None;
    let mut extra = Payload::new();
    for (key, value) in root {
        if key == "pages" {
            pages = Some(value);
        } else {
            extra.insert(key, value);
        }
    }

    let Some(Value::Array(pages)) = pages else {
        return Err(FormatError::MissingPages);
    };

    let pages = pages
        .into_iter()
        .enumerate()
        .map(|(index, value)| decode_page(index, value))
        .collect::<FormatResult<Vec<_>>>()?;

    debug!(pages = pages.len(), extra_keys = extra.len(), "Decoded configuration");

    Ok(Document { pages, extra })
}

fn decode_page(index: usize, value: Value) -> FormatResult<Page> {
    let wire: PageWire = serde_json::from_value(value)
        .map_err(|e| FormatError::invalid_structure(format!("page #{}", index + 1), e.to_string()))?;

    Ok(wire.into_page())
}

/// Parse the free-form payload block of a single widget.
///
/// Blank text is an empty payload. Shared widget fields (`title`, `cache`,
/// ...) are edited on the widget itself and are refused here.
pub fn parse_payload(source: &str) -> Result<Payload, PayloadFormatError> {
    if source.trim().is_empty() {
        return Ok(Payload::new());
    }

    let parsed: Yaml = serde_yaml::from_str(source)
        .map_err(|e| PayloadFormatError::Syntax(e.to_string()))?;
    let parsed = to_json(parsed, "").map_err(|e| PayloadFormatError::InvalidValue {
        location: e.location,
        message: e.message,
    })?;

    let Value::Object(payload) = parsed else {
        return Err(PayloadFormatError::NotAnObject);
    };

    if let Some(key) = payload
        .keys()
        .find(|key| SHARED_WIDGET_KEYS.contains(&key.as_str()))
    {
        return Err(PayloadFormatError::SharedKey(key.clone()));
    }

    Ok(payload)
}
