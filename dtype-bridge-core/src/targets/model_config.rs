// dtype-bridge-core/src/targets/model_config.rs

use super::DtypeTarget;
use crate::error::DtypeError;
use crate::types::CanonicalDtype;
use std::fmt;
use std::str::FromStr;

/// Data type names accepted in a model configuration (`config.pbtxt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelConfigType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Fp16,
    Fp32,
    Fp64,
    String,
    Bf16,
}

impl ModelConfigType {
    const ALL: [ModelConfigType; 12] = [
        ModelConfigType::Bool,
        ModelConfigType::Int8,
        ModelConfigType::Int16,
        ModelConfigType::Int32,
        ModelConfigType::Int64,
        ModelConfigType::Uint8,
        ModelConfigType::Uint16,
        ModelConfigType::Fp16,
        ModelConfigType::Fp32,
        ModelConfigType::Fp64,
        ModelConfigType::String,
        ModelConfigType::Bf16,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModelConfigType::Bool => "TYPE_BOOL",
            ModelConfigType::Int8 => "TYPE_INT8",
            ModelConfigType::Int16 => "TYPE_INT16",
            ModelConfigType::Int32 => "TYPE_INT32",
            ModelConfigType::Int64 => "TYPE_INT64",
            ModelConfigType::Uint8 => "TYPE_UINT8",
            ModelConfigType::Uint16 => "TYPE_UINT16",
            ModelConfigType::Fp16 => "TYPE_FP16",
            ModelConfigType::Fp32 => "TYPE_FP32",
            ModelConfigType::Fp64 => "TYPE_FP64",
            ModelConfigType::String => "TYPE_STRING",
            ModelConfigType::Bf16 => "TYPE_BF16",
        }
    }
}

impl fmt::Display for ModelConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelConfigType {
    type Err = DtypeError;

    /// Parses an exact config name such as `"TYPE_FP32"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelConfigType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| DtypeError::UnknownConfigType(s.to_string()))
    }
}

impl PartialEq<&str> for ModelConfigType {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(feature = "model-config")]
const TABLE: [Option<ModelConfigType>; CanonicalDtype::COUNT] = [
    Some(ModelConfigType::Bool),
    Some(ModelConfigType::Int8),
    Some(ModelConfigType::Int16),
    Some(ModelConfigType::Int32),
    Some(ModelConfigType::Int64),
    Some(ModelConfigType::Uint8),
    Some(ModelConfigType::Uint16),
    Some(ModelConfigType::Fp16),
    Some(ModelConfigType::Fp32),
    Some(ModelConfigType::Fp64),
    Some(ModelConfigType::String),
    Some(ModelConfigType::Bf16),
];

/// Model configuration data type strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelConfig;

impl ModelConfig {
    /// Inverse of the config table: `"TYPE_FP32"` -> `Float32`.
    ///
    /// Fails for names that are not config types, and for every name when
    /// the `model-config` table is compiled out.
    pub fn from_config_string(s: &str) -> Result<CanonicalDtype, DtypeError> {
        let ty: ModelConfigType = s.parse()?;
        CanonicalDtype::ALL
            .into_iter()
            .find(|dtype| Self::lookup(*dtype) == Some(ty))
            .ok_or_else(|| DtypeError::UnknownConfigType(s.to_string()))
    }
}

impl DtypeTarget for ModelConfig {
    type Repr = ModelConfigType;
    const NAME: &'static str = "model-config";
    const ENABLED: bool = cfg!(feature = "model-config");

    fn lookup(dtype: CanonicalDtype) -> Option<ModelConfigType> {
        #[cfg(feature = "model-config")]
        {
            TABLE[dtype.ordinal()]
        }
        #[cfg(not(feature = "model-config"))]
        {
            let _ = dtype;
            None
        }
    }
}
