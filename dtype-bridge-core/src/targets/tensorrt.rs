// dtype-bridge-core/src/targets/tensorrt.rs

use super::DtypeTarget;
use crate::types::CanonicalDtype;

/// `nvinfer1::DataType` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum TrtDataType {
    Float = 0,
    Half = 1,
    Int8 = 2,
    Int32 = 3,
    Bool = 4,
    Uint8 = 5,
    Fp8 = 6,
    Bf16 = 7,
    Int64 = 8,
}

impl TrtDataType {
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Name as exposed by the Python bindings, e.g. `"float16"`.
    pub fn name(self) -> &'static str {
        match self {
            TrtDataType::Float => "float32",
            TrtDataType::Half => "float16",
            TrtDataType::Int8 => "int8",
            TrtDataType::Int32 => "int32",
            TrtDataType::Bool => "bool",
            TrtDataType::Uint8 => "uint8",
            TrtDataType::Fp8 => "fp8",
            TrtDataType::Bf16 => "bfloat16",
            TrtDataType::Int64 => "int64",
        }
    }
}

#[cfg(feature = "tensorrt")]
const TABLE: [Option<TrtDataType>; CanonicalDtype::COUNT] = [
    Some(TrtDataType::Bool),  // Bool
    Some(TrtDataType::Int8),  // Int8
    None,                     // Int16
    Some(TrtDataType::Int32), // Int32
    Some(TrtDataType::Int64), // Int64
    Some(TrtDataType::Uint8), // UInt8
    None,                     // UInt16
    Some(TrtDataType::Half),  // Float16
    Some(TrtDataType::Float), // Float32
    None,                     // Float64
    None,                     // String
    Some(TrtDataType::Bf16),  // BFloat16
];

/// The TensorRT inference runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TensorRt;

impl DtypeTarget for TensorRt {
    type Repr = TrtDataType;
    const NAME: &'static str = "tensorrt";
    const ENABLED: bool = cfg!(feature = "tensorrt");

    fn lookup(dtype: CanonicalDtype) -> Option<TrtDataType> {
        #[cfg(feature = "tensorrt")]
        {
            TABLE[dtype.ordinal()]
        }
        #[cfg(not(feature = "tensorrt"))]
        {
            let _ = dtype;
            None
        }
    }
}
