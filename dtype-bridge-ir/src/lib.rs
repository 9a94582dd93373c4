//! Model version writer for the vision toolkit.
//!
//! Tags every model output with a stable name and asks the toolkit's own
//! serializer to write the two artifacts of a model version
//! (`model.xml` and `model.bin`). The serializer itself is an external
//! collaborator, plugged in through [`IrSerializer`].

pub mod error;
pub mod logging;
pub mod model_version;

pub use error::{ExternalError, IrError};
pub use logging::init_logging;
pub use model_version::{
    save_model_version, save_model_version_with, IrModel, IrSerializer, ModelVersionPaths,
    SaveOptions, STRUCTURE_FILE, WEIGHTS_FILE,
};
