// dtype-bridge-core/src/targets/onnx.rs

use super::DtypeTarget;
use crate::error::DtypeError;
use crate::types::CanonicalDtype;

/// `onnx.TensorProto.DataType` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum OnnxDataType {
    Undefined = 0,
    Float = 1,
    Uint8 = 2,
    Int8 = 3,
    Uint16 = 4,
    Int16 = 5,
    Int32 = 6,
    Int64 = 7,
    String = 8,
    Bool = 9,
    Float16 = 10,
    Double = 11,
    Uint32 = 12,
    Uint64 = 13,
    Complex64 = 14,
    Complex128 = 15,
    Bfloat16 = 16,
}

impl OnnxDataType {
    /// The protobuf enum code.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// The `TensorProto` enum name, e.g. `"FLOAT"`.
    pub fn name(self) -> &'static str {
        match self {
            OnnxDataType::Undefined => "UNDEFINED",
            OnnxDataType::Float => "FLOAT",
            OnnxDataType::Uint8 => "UINT8",
            OnnxDataType::Int8 => "INT8",
            OnnxDataType::Uint16 => "UINT16",
            OnnxDataType::Int16 => "INT16",
            OnnxDataType::Int32 => "INT32",
            OnnxDataType::Int64 => "INT64",
            OnnxDataType::String => "STRING",
            OnnxDataType::Bool => "BOOL",
            OnnxDataType::Float16 => "FLOAT16",
            OnnxDataType::Double => "DOUBLE",
            OnnxDataType::Uint32 => "UINT32",
            OnnxDataType::Uint64 => "UINT64",
            OnnxDataType::Complex64 => "COMPLEX64",
            OnnxDataType::Complex128 => "COMPLEX128",
            OnnxDataType::Bfloat16 => "BFLOAT16",
        }
    }
}

impl TryFrom<i32> for OnnxDataType {
    type Error = DtypeError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        let ty = match code {
            0 => OnnxDataType::Undefined,
            1 => OnnxDataType::Float,
            2 => OnnxDataType::Uint8,
            3 => OnnxDataType::Int8,
            4 => OnnxDataType::Uint16,
            5 => OnnxDataType::Int16,
            6 => OnnxDataType::Int32,
            7 => OnnxDataType::Int64,
            8 => OnnxDataType::String,
            9 => OnnxDataType::Bool,
            10 => OnnxDataType::Float16,
            11 => OnnxDataType::Double,
            12 => OnnxDataType::Uint32,
            13 => OnnxDataType::Uint64,
            14 => OnnxDataType::Complex64,
            15 => OnnxDataType::Complex128,
            16 => OnnxDataType::Bfloat16,
            other => return Err(DtypeError::UnknownOnnxCode(other)),
        };
        Ok(ty)
    }
}

#[cfg(feature = "onnx")]
const TABLE: [Option<OnnxDataType>; CanonicalDtype::COUNT] = [
    Some(OnnxDataType::Bool),    // Bool
    Some(OnnxDataType::Int8),    // Int8
    Some(OnnxDataType::Int16),   // Int16
    Some(OnnxDataType::Int32),   // Int32
    Some(OnnxDataType::Int64),   // Int64
    Some(OnnxDataType::Uint8),   // UInt8
    Some(OnnxDataType::Uint16),  // UInt16
    Some(OnnxDataType::Float16), // Float16
    Some(OnnxDataType::Float),   // Float32
    Some(OnnxDataType::Double),  // Float64
    Some(OnnxDataType::String),  // String
    None,                        // BFloat16
];

/// The ONNX serialization format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Onnx;

impl DtypeTarget for Onnx {
    type Repr = OnnxDataType;
    const NAME: &'static str = "onnx";
    const ENABLED: bool = cfg!(feature = "onnx");

    fn lookup(dtype: CanonicalDtype) -> Option<OnnxDataType> {
        #[cfg(feature = "onnx")]
        {
            TABLE[dtype.ordinal()]
        }
        #[cfg(not(feature = "onnx"))]
        {
            let _ = dtype;
            None
        }
    }
}
