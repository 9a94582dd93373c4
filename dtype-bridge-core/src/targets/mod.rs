// dtype-bridge-core/src/targets/mod.rs

use crate::types::CanonicalDtype;
use std::fmt::Debug;

pub mod model_config;
pub mod onnx;
pub mod tensorrt;
pub mod torch;

pub use model_config::{ModelConfig, ModelConfigType};
pub use onnx::{Onnx, OnnxDataType};
pub use tensorrt::{TensorRt, TrtDataType};
pub use torch::{Torch, TorchType};

/// An external type system the registry translates canonical dtypes into.
///
/// Implementors are zero-sized markers. Each one owns a partial table
/// `CanonicalDtype -> Repr`; `None` means the target has no equivalent.
pub trait DtypeTarget {
    /// The target's own representation of a data type.
    type Repr: Copy + Debug + PartialEq + Eq + Send + Sync + 'static;

    /// Short name used in logs and in the support matrix.
    const NAME: &'static str;

    /// Whether this target's table was compiled in (see the crate features).
    const ENABLED: bool;

    /// Returns the target representation of `dtype`, or `None` when the
    /// target cannot represent it or its table is compiled out.
    fn lookup(dtype: CanonicalDtype) -> Option<Self::Repr>;
}
