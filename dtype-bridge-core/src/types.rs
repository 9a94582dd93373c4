use crate::error::DtypeError;
use std::fmt;
use std::str::FromStr;

/// Defines the canonical data types every target vocabulary maps from.
///
/// The set is closed. Each target table is an array of length
/// [`CanonicalDtype::COUNT`] indexed by [`CanonicalDtype::ordinal`], so a new
/// member cannot be added without touching every table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalDtype {
    /// Boolean type (true/false values).
    Bool,
    /// 8-bit signed integer.
    Int8,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 8-bit unsigned integer.
    UInt8,
    /// 16-bit unsigned integer.
    UInt16,
    /// 16-bit IEEE 754 floating point.
    Float16,
    /// 32-bit IEEE 754 floating point.
    Float32,
    /// 64-bit IEEE 754 floating point.
    Float64,
    /// Variable-length string (numpy object arrays).
    String,
    /// 16-bit brain floating point.
    BFloat16,
}

impl CanonicalDtype {
    /// Number of canonical dtypes.
    pub const COUNT: usize = 12;

    /// Every canonical dtype, in ordinal order.
    pub const ALL: [CanonicalDtype; Self::COUNT] = [
        CanonicalDtype::Bool,
        CanonicalDtype::Int8,
        CanonicalDtype::Int16,
        CanonicalDtype::Int32,
        CanonicalDtype::Int64,
        CanonicalDtype::UInt8,
        CanonicalDtype::UInt16,
        CanonicalDtype::Float16,
        CanonicalDtype::Float32,
        CanonicalDtype::Float64,
        CanonicalDtype::String,
        CanonicalDtype::BFloat16,
    ];

    /// Position of this dtype in [`CanonicalDtype::ALL`].
    #[inline]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Name numpy uses for this dtype.
    ///
    /// Numpy stores strings in object arrays and has no native bfloat16, so
    /// those two come out as `"object"` and `"bf16"`.
    pub fn numpy_name(self) -> &'static str {
        match self {
            CanonicalDtype::Bool => "bool",
            CanonicalDtype::Int8 => "int8",
            CanonicalDtype::Int16 => "int16",
            CanonicalDtype::Int32 => "int32",
            CanonicalDtype::Int64 => "int64",
            CanonicalDtype::UInt8 => "uint8",
            CanonicalDtype::UInt16 => "uint16",
            CanonicalDtype::Float16 => "float16",
            CanonicalDtype::Float32 => "float32",
            CanonicalDtype::Float64 => "float64",
            CanonicalDtype::String => "object",
            CanonicalDtype::BFloat16 => "bf16",
        }
    }

    /// Size of a single element in bytes, `None` for variable-length strings.
    pub fn size_in_bytes(self) -> Option<usize> {
        match self {
            CanonicalDtype::Bool | CanonicalDtype::Int8 | CanonicalDtype::UInt8 => Some(1),
            CanonicalDtype::Int16
            | CanonicalDtype::UInt16
            | CanonicalDtype::Float16
            | CanonicalDtype::BFloat16 => Some(2),
            CanonicalDtype::Int32 | CanonicalDtype::Float32 => Some(4),
            CanonicalDtype::Int64 | CanonicalDtype::Float64 => Some(8),
            CanonicalDtype::String => None,
        }
    }

    pub fn is_floating_point(self) -> bool {
        matches!(
            self,
            CanonicalDtype::Float16
                | CanonicalDtype::Float32
                | CanonicalDtype::Float64
                | CanonicalDtype::BFloat16
        )
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            CanonicalDtype::Int8
                | CanonicalDtype::Int16
                | CanonicalDtype::Int32
                | CanonicalDtype::Int64
                | CanonicalDtype::UInt8
                | CanonicalDtype::UInt16
        )
    }

    /// True for signed integers and all floating point types.
    pub fn is_signed(self) -> bool {
        self.is_floating_point()
            || matches!(
                self,
                CanonicalDtype::Int8
                    | CanonicalDtype::Int16
                    | CanonicalDtype::Int32
                    | CanonicalDtype::Int64
            )
    }
}

impl fmt::Display for CanonicalDtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.numpy_name())
    }
}

impl FromStr for CanonicalDtype {
    type Err = DtypeError;

    /// Parses a numpy-style dtype name. Matching is case-insensitive.
    ///
    /// Unknown names are an error rather than Unsupported: a string that is
    /// not a canonical dtype is a caller bug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dtype = match s.trim().to_ascii_lowercase().as_str() {
            "bool" | "bool_" => CanonicalDtype::Bool,
            "int8" | "i1" => CanonicalDtype::Int8,
            "int16" | "i2" | "short" => CanonicalDtype::Int16,
            "int32" | "i4" | "intc" => CanonicalDtype::Int32,
            "int64" | "i8" | "long" => CanonicalDtype::Int64,
            "uint8" | "u1" | "ubyte" => CanonicalDtype::UInt8,
            "uint16" | "u2" | "ushort" => CanonicalDtype::UInt16,
            "float16" | "f2" | "half" => CanonicalDtype::Float16,
            "float32" | "f4" | "float" | "single" => CanonicalDtype::Float32,
            "float64" | "f8" | "double" => CanonicalDtype::Float64,
            "object" | "object_" | "str" | "string" | "bytes" => CanonicalDtype::String,
            "bf16" | "bfloat16" => CanonicalDtype::BFloat16,
            _ => return Err(DtypeError::UnknownDtypeName(s.to_string())),
        };
        Ok(dtype)
    }
}

/// Associates a Rust element type with its canonical dtype.
pub trait HasDtype {
    const DTYPE: CanonicalDtype;
}

macro_rules! has_dtype {
    ($type:ty, $dtype:expr) => {
        impl HasDtype for $type {
            const DTYPE: CanonicalDtype = $dtype;
        }
    };
}

has_dtype!(bool, CanonicalDtype::Bool);
has_dtype!(i8, CanonicalDtype::Int8);
has_dtype!(i16, CanonicalDtype::Int16);
has_dtype!(i32, CanonicalDtype::Int32);
has_dtype!(i64, CanonicalDtype::Int64);
has_dtype!(u8, CanonicalDtype::UInt8);
has_dtype!(u16, CanonicalDtype::UInt16);
has_dtype!(f32, CanonicalDtype::Float32);
has_dtype!(f64, CanonicalDtype::Float64);
has_dtype!(String, CanonicalDtype::String);
has_dtype!(&str, CanonicalDtype::String);

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
