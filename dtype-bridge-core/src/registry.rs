// dtype-bridge-core/src/registry.rs

use crate::targets::{
    DtypeTarget, ModelConfig, ModelConfigType, Onnx, OnnxDataType, TensorRt, Torch, TorchType,
    TrtDataType,
};
use crate::types::CanonicalDtype;
use log::trace;
use std::fmt;

/// Translates canonical dtypes into each target system's representation.
///
/// The registry is stateless; all tables are compile-time constants. Every
/// lookup is total over [`CanonicalDtype`] and returns `None` when the target
/// has no equivalent. There is no fallback between dtypes: an unmapped
/// `UInt16` is never widened to `Int32`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DtypeRegistry;

impl DtypeRegistry {
    /// Creates a new `DtypeRegistry`.
    pub fn new() -> Self {
        DtypeRegistry
    }

    /// Looks `dtype` up in the table of target `T`.
    pub fn lookup<T: DtypeTarget>(&self, dtype: CanonicalDtype) -> Option<T::Repr> {
        let repr = T::lookup(dtype);
        if repr.is_none() {
            trace!("{} has no mapping for {}", T::NAME, dtype);
        }
        repr
    }

    /// ONNX `TensorProto` data type.
    pub fn to_serialization_format(&self, dtype: CanonicalDtype) -> Option<OnnxDataType> {
        self.lookup::<Onnx>(dtype)
    }

    /// Model configuration type string, e.g. `TYPE_FP32`.
    pub fn to_config_string(&self, dtype: CanonicalDtype) -> Option<ModelConfigType> {
        self.lookup::<ModelConfig>(dtype)
    }

    /// TensorRT data type.
    pub fn to_runtime_type(&self, dtype: CanonicalDtype) -> Option<TrtDataType> {
        self.lookup::<TensorRt>(dtype)
    }

    /// Torch element type.
    pub fn to_framework_type(&self, dtype: CanonicalDtype) -> Option<TorchType> {
        self.lookup::<Torch>(dtype)
    }

    pub fn is_supported<T: DtypeTarget>(&self, dtype: CanonicalDtype) -> bool {
        self.lookup::<T>(dtype).is_some()
    }

    /// Canonical dtypes target `T` can represent, in ordinal order.
    pub fn supported<T: DtypeTarget>(&self) -> Vec<CanonicalDtype> {
        CanonicalDtype::ALL
            .into_iter()
            .filter(|dtype| self.lookup::<T>(*dtype).is_some())
            .collect()
    }

    /// Full snapshot of target `T`'s table, one entry per canonical dtype.
    pub fn table<T: DtypeTarget>(&self) -> Vec<(CanonicalDtype, Option<T::Repr>)> {
        CanonicalDtype::ALL
            .into_iter()
            .map(|dtype| (dtype, self.lookup::<T>(dtype)))
            .collect()
    }

    /// Which target supports which canonical dtype.
    pub fn support_matrix(&self) -> SupportMatrix {
        let rows = CanonicalDtype::ALL
            .into_iter()
            .map(|dtype| SupportRow {
                dtype,
                serialization_format: self.is_supported::<Onnx>(dtype),
                config_string: self.is_supported::<ModelConfig>(dtype),
                runtime_type: self.is_supported::<TensorRt>(dtype),
                framework_type: self.is_supported::<Torch>(dtype),
            })
            .collect();
        SupportMatrix { rows }
    }
}

/// Support flags of one canonical dtype across the four targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportRow {
    pub dtype: CanonicalDtype,
    pub serialization_format: bool,
    pub config_string: bool,
    pub runtime_type: bool,
    pub framework_type: bool,
}

/// Result of [`DtypeRegistry::support_matrix`]. Rows are in ordinal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportMatrix {
    rows: Vec<SupportRow>,
}

impl SupportMatrix {
    pub fn rows(&self) -> &[SupportRow] {
        &self.rows
    }

    pub fn row(&self, dtype: CanonicalDtype) -> &SupportRow {
        &self.rows[dtype.ordinal()]
    }
}

impl fmt::Display for SupportMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |supported: bool| if supported { "yes" } else { "-" };
        writeln!(
            f,
            "{:<10} {:>8} {:>14} {:>10} {:>8}",
            "dtype",
            Onnx::NAME,
            ModelConfig::NAME,
            TensorRt::NAME,
            Torch::NAME
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<10} {:>8} {:>14} {:>10} {:>8}",
                row.dtype.numpy_name(),
                mark(row.serialization_format),
                mark(row.config_string),
                mark(row.runtime_type),
                mark(row.framework_type)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
