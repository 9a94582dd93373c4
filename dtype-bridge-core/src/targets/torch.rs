// dtype-bridge-core/src/targets/torch.rs

use super::DtypeTarget;
use crate::types::CanonicalDtype;

/// Torch element types.
///
/// Torch has no string tensor; strings travel as a `List[str]` handle, which
/// is what [`TorchType::StringList`] stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TorchType {
    UInt8,
    Int8,
    Int16,
    Int32,
    Int64,
    Float16,
    Float32,
    Float64,
    Bool,
    BFloat16,
    StringList,
}

impl TorchType {
    /// `c10::ScalarType` code, `None` for [`TorchType::StringList`].
    pub fn scalar_type_code(self) -> Option<i32> {
        match self {
            TorchType::UInt8 => Some(0),
            TorchType::Int8 => Some(1),
            TorchType::Int16 => Some(2),
            TorchType::Int32 => Some(3),
            TorchType::Int64 => Some(4),
            TorchType::Float16 => Some(5),
            TorchType::Float32 => Some(6),
            TorchType::Float64 => Some(7),
            TorchType::Bool => Some(11),
            TorchType::BFloat16 => Some(15),
            TorchType::StringList => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TorchType::UInt8 => "torch.uint8",
            TorchType::Int8 => "torch.int8",
            TorchType::Int16 => "torch.int16",
            TorchType::Int32 => "torch.int32",
            TorchType::Int64 => "torch.int64",
            TorchType::Float16 => "torch.float16",
            TorchType::Float32 => "torch.float32",
            TorchType::Float64 => "torch.float64",
            TorchType::Bool => "torch.bool",
            TorchType::BFloat16 => "torch.bfloat16",
            TorchType::StringList => "List[str]",
        }
    }
}

// Float16 and BFloat16 stay unmapped even though torch has both.
#[cfg(feature = "torch")]
const TABLE: [Option<TorchType>; CanonicalDtype::COUNT] = [
    Some(TorchType::Bool),       // Bool
    Some(TorchType::Int8),       // Int8
    Some(TorchType::Int16),      // Int16
    Some(TorchType::Int32),      // Int32
    Some(TorchType::Int64),      // Int64
    Some(TorchType::UInt8),      // UInt8
    None,                        // UInt16
    None,                        // Float16
    Some(TorchType::Float32),    // Float32
    Some(TorchType::Float64),    // Float64
    Some(TorchType::StringList), // String
    None,                        // BFloat16
];

/// The Torch tensor framework.
#[derive(Debug, Clone, Copy, Default)]
pub struct Torch;

impl DtypeTarget for Torch {
    type Repr = TorchType;
    const NAME: &'static str = "torch";
    const ENABLED: bool = cfg!(feature = "torch");

    fn lookup(dtype: CanonicalDtype) -> Option<TorchType> {
        #[cfg(feature = "torch")]
        {
            TABLE[dtype.ordinal()]
        }
        #[cfg(not(feature = "torch"))]
        {
            let _ = dtype;
            None
        }
    }
}
