//! Serde shapes of the YAML consumed by the Glance renderer.
//!
//! These never carry identifiers. Conversions into the model mint fresh ids;
//! conversions out of the model drop every field that holds its default.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::ast::{Column, ColumnSize, Document, Page, PageWidth, Payload, Widget, WidgetType};
use crate::id_generator::new_id;

/// Widget keys that are modeled explicitly; everything else is payload
pub const SHARED_WIDGET_KEYS: [&str; 6] =
    ["type", "title", "title-url", "hide-header", "cache", "css-class"];

#[derive(Debug, Serialize)]
pub(crate) struct ConfigWire {
    pub pages: Vec<PageWire>,
    #[serde(flatten)]
    pub extra: Payload,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct PageWire {
    #[serde(deserialize_with = "scalar_text")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "optional_scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<PageWidth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_vertically: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_desktop_navigation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_mobile_header: Option<bool>,
    #[serde(default)]
    pub columns: Option<Vec<ColumnWire>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ColumnWire {
    pub size: ColumnSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widgets: Option<Vec<WidgetWire>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct WidgetWire {
    #[serde(rename = "type")]
    pub widget_type: WidgetType,
    #[serde(
        default,
        deserialize_with = "optional_scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub title_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub cache: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_scalar_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub css_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_header: Option<bool>,
    #[serde(flatten)]
    pub properties: Payload,
}

/// Text fields accept any YAML scalar; `2024` and `true` become their text
fn scalar_to_text<E: de::Error>(value: Value) -> Result<String, E> {
    match value {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Err(E::invalid_type(de::Unexpected::Unit, &"a string")),
        Value::Array(_) => Err(E::invalid_type(de::Unexpected::Seq, &"a string")),
        Value::Object(_) => Err(E::invalid_type(de::Unexpected::Map, &"a string")),
    }
}

fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    scalar_to_text(Value::deserialize(deserializer)?)
}

fn optional_scalar_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => scalar_to_text(value).map(Some),
    }
}

/// Empty strings mean "unset"
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn non_empty_ref(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}

fn flag(value: bool) -> Option<bool> {
    value.then_some(true)
}

impl PageWire {
    pub fn into_page(self) -> Page {
        Page {
            id: new_id(),
            name: self.name,
            slug: non_empty(self.slug),
            width: self.width.unwrap_or_default(),
            center_vertically: self.center_vertically.unwrap_or(false),
            hide_desktop_navigation: self.hide_desktop_navigation.unwrap_or(false),
            show_mobile_header: self.show_mobile_header.unwrap_or(false),
            columns: self
                .columns
                .unwrap_or_default()
                .into_iter()
                .map(ColumnWire::into_column)
                .collect(),
        }
    }
}

impl ColumnWire {
    pub fn into_column(self) -> Column {
        Column {
            id: new_id(),
            size: self.size,
            widgets: self
                .widgets
                .unwrap_or_default()
                .into_iter()
                .map(WidgetWire::into_widget)
                .collect(),
        }
    }
}

impl WidgetWire {
    pub fn into_widget(self) -> Widget {
        Widget {
            id: new_id(),
            widget_type: self.widget_type,
            title: non_empty(self.title),
            title_url: non_empty(self.title_url),
            cache: non_empty(self.cache),
            css_class: non_empty(self.css_class),
            hide_header: self.hide_header.unwrap_or(false),
            properties: self.properties,
        }
    }
}

impl From<&Document> for ConfigWire {
    fn from(doc: &Document) -> Self {
        let mut extra = Payload::new();
        for (key, value) in &doc.extra {
            if key == "pages" {
                warn!("Dropping top-level extra key that shadows the pages array");
                continue;
            }
            extra.insert(key.clone(), value.clone());
        }

        Self {
            pages: doc.pages.iter().map(PageWire::from).collect(),
            extra,
        }
    }
}

impl From<&Page> for PageWire {
    fn from(page: &Page) -> Self {
        Self {
            name: page.name.clone(),
            slug: non_empty_ref(&page.slug),
            width: (!page.width.is_default()).then_some(page.width),
            center_vertically: flag(page.center_vertically),
            hide_desktop_navigation: flag(page.hide_desktop_navigation),
            show_mobile_header: flag(page.show_mobile_header),
            columns: Some(page.columns.iter().map(ColumnWire::from).collect()),
        }
    }
}

impl From<&Column> for ColumnWire {
    fn from(column: &Column) -> Self {
        let widgets = (!column.widgets.is_empty())
            .then(|| column.widgets.iter().map(WidgetWire::from).collect());

        Self {
            size: column.size,
            widgets,
        }
    }
}

impl From<&Widget> for WidgetWire {
    fn from(widget: &Widget) -> Self {
        let mut properties = Payload::new();
        for (key, value) in &widget.properties {
            if SHARED_WIDGET_KEYS.contains(&key.as_str()) {
                warn!(
                    widget_id = %widget.id,
                    key = %key,
                    "Skipping payload key that collides with a shared widget field"
                );
                continue;
            }
            properties.insert(key.clone(), value.clone());
        }

        Self {
            widget_type: widget.widget_type,
            title: non_empty_ref(&widget.title),
            title_url: non_empty_ref(&widget.title_url),
            cache: non_empty_ref(&widget.cache),
            css_class: non_empty_ref(&widget.css_class),
            hide_header: flag(widget.hide_header),
            properties,
        }
    }
}
