//! Prints which target systems support which canonical dtypes, then resolves
//! the dtypes named on the command line.
//!
//! ```text
//! cargo run -p dtype-bridge-core --example support_matrix -- float32 bf16 object
//! ```

use dtype_bridge_core::{CanonicalDtype, DtypeError, DtypeRegistry};

fn main() -> Result<(), DtypeError> {
    let registry = DtypeRegistry::new();
    println!("{}", registry.support_matrix());

    for arg in std::env::args().skip(1) {
        let dtype: CanonicalDtype = arg.parse()?;
        println!("--- {} ---", dtype);
        println!("  onnx         : {:?}", registry.to_serialization_format(dtype));
        println!(
            "  model-config : {}",
            registry
                .to_config_string(dtype)
                .map_or("unsupported", |ty| ty.as_str())
        );
        println!("  tensorrt     : {:?}", registry.to_runtime_type(dtype));
        println!(
            "  torch        : {}",
            registry
                .to_framework_type(dtype)
                .map_or("unsupported", |ty| ty.name())
        );
    }
    Ok(())
}
