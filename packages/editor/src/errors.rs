//! Error types for the editor

use glance_model::{EncodeError, FormatError, PayloadFormatError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("{0}")]
    Format(#[from] FormatError),

    #[error("{0}")]
    Payload(#[from] PayloadFormatError),

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),
}
