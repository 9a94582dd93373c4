use crate::error::IrError;
use log::info;
use once_cell::sync::OnceCell;

static LOGGER_INITIALIZED: OnceCell<Result<(), String>> = OnceCell::new();

/// Initializes `env_logger` once for the whole process.
///
/// Idempotent and thread-safe: later calls return the outcome of the first.
/// The level is controlled by `RUST_LOG`
/// (e.g., `RUST_LOG=dtype_bridge_ir=debug`).
pub fn init_logging() -> Result<(), IrError> {
    LOGGER_INITIALIZED
        .get_or_init(|| {
            let result = env_logger::builder()
                .is_test(false)
                .try_init()
                .map_err(|e| e.to_string());
            if result.is_ok() {
                info!("dtype-bridge logger initialized.");
            }
            result
        })
        .clone()
        .map_err(IrError::LoggerInit)
}
