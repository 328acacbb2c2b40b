//! # Glance Model
//!
//! Dashboard document tree (pages → columns → widgets) and its YAML codec.
//!
//! ```text
//! YAML text ──decode──▶ Document (with ephemeral ids) ──encode──▶ YAML text
//! ```
//!
//! Ids exist only in memory. The wire format identifies nodes by position.

pub mod ast;
pub mod catalog;
pub mod error;
pub mod id_generator;
pub mod parser;
pub mod serializer;
mod wire;

pub use ast::{Column, ColumnSize, Document, Page, PageWidth, Payload, Widget, WidgetType};
pub use catalog::WidgetCategory;
pub use error::{EncodeError, FormatError, FormatResult, PayloadFormatError, UnknownVariantError};
pub use id_generator::new_id;
pub use parser::{decode, parse_payload};
pub use serializer::{encode, payload_to_text};
pub use wire::SHARED_WIDGET_KEYS;
