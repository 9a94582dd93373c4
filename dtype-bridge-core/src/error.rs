use thiserror::Error;

/// Error type for parsing dtype identifiers.
///
/// Registry lookups never return this: a missing mapping is reported as
/// `None`. Only the string and code parsers at the edge of the crate fail.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DtypeError {
    #[error("Unknown dtype name: '{0}'")]
    UnknownDtypeName(String),

    #[error("Unknown model config data type: '{0}'")]
    UnknownConfigType(String),

    #[error("Unknown ONNX TensorProto data type code: {0}")]
    UnknownOnnxCode(i32),
}
