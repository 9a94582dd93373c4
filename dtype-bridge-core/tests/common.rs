use dtype_bridge_core::{CanonicalDtype, DtypeRegistry, DtypeTarget};
use std::sync::Once;

static LOGGER_INIT: Once = Once::new();

// Shared by several test crates; not every one uses every helper.
#[allow(dead_code)]
pub fn setup_logger() {
    LOGGER_INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Canonical dtypes target `T` leaves unmapped.
#[allow(dead_code)]
pub fn unsupported<T: DtypeTarget>() -> Vec<CanonicalDtype> {
    DtypeRegistry::new()
        .table::<T>()
        .into_iter()
        .filter_map(|(dtype, repr)| repr.is_none().then_some(dtype))
        .collect()
}
