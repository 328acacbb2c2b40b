use thiserror::Error;

pub type FormatResult<T> = Result<T, FormatError>;

/// Full-document decode failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("Invalid YAML: {0}")]
    Syntax(String),

    #[error("Invalid YAML: expected an object")]
    NotAnObject,

    #[error("Invalid YAML: pages array is required")]
    MissingPages,

    #[error("Invalid {location}: {message}")]
    InvalidStructure { location: String, message: String },
}

impl FormatError {
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax(message.into())
    }

    pub fn invalid_structure(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            location: location.into(),
            message: message.into(),
        }
    }
}

/// Failures parsing a single widget's free-form payload block
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayloadFormatError {
    #[error("Invalid YAML: {0}")]
    Syntax(String),

    #[error("Widget properties must be a YAML object")]
    NotAnObject,

    #[error("`{0}` is a shared widget field and cannot be set in the properties")]
    SharedKey(String),

    #[error("Invalid {location}: {message}")]
    InvalidValue { location: String, message: String },
}

/// The YAML serializer refused the tree
#[derive(Error, Debug)]
#[error("Failed to write YAML: {0}")]
pub struct EncodeError(#[from] serde_yaml::Error);

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownVariantError {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariantError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
