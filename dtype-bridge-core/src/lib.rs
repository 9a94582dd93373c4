//! Canonical dtype registry.
//!
//! Maps a [`CanonicalDtype`] to its equivalent in four external type systems:
//! the ONNX serialization format, model configuration strings, the TensorRT
//! runtime and the Torch framework. Each target table sits behind a cargo
//! feature of the same name; a disabled target reports every dtype as
//! unsupported.

pub mod error;
pub mod registry;
pub mod targets;
pub mod types;

pub use error::DtypeError;
pub use registry::{DtypeRegistry, SupportMatrix, SupportRow};
pub use targets::{
    DtypeTarget, ModelConfig, ModelConfigType, Onnx, OnnxDataType, TensorRt, Torch, TorchType,
    TrtDataType,
};
pub use types::{CanonicalDtype, HasDtype};

/// Shorthand for [`ModelConfig::from_config_string`].
pub fn from_config_string(s: &str) -> Result<CanonicalDtype, DtypeError> {
    ModelConfig::from_config_string(s)
}
