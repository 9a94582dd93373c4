// dtype-bridge-ir/src/model_version.rs

use crate::error::{ExternalError, IrError};
use log::{debug, info};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the structure (graph) artifact.
pub const STRUCTURE_FILE: &str = "model.xml";
/// File name of the weights artifact.
pub const WEIGHTS_FILE: &str = "model.bin";

/// An in-memory model owned by the external vision toolkit.
pub trait IrModel {
    /// Number of output tensors.
    fn output_count(&self) -> usize;

    /// Replaces the tensor names of output `index`.
    fn set_output_names(&mut self, index: usize, names: BTreeSet<String>)
        -> Result<(), ExternalError>;
}

/// The external toolkit's serializer.
///
/// Must write the structure and the weights of `model` to the two given
/// paths, both derived from the same model.
pub trait IrSerializer<M: IrModel> {
    fn serialize(&self, model: &M, structure: &Path, weights: &Path) -> Result<(), ExternalError>;
}

/// The two artifacts of one model version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelVersionPaths {
    pub dir: PathBuf,
    pub structure: PathBuf,
    pub weights: PathBuf,
}

impl ModelVersionPaths {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref().to_path_buf();
        ModelVersionPaths {
            structure: dir.join(STRUCTURE_FILE),
            weights: dir.join(WEIGHTS_FILE),
            dir,
        }
    }
}

/// Options for [`save_model_version_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOptions {
    /// Output `i` is named `{output_prefix}{i}`.
    pub output_prefix: String,
}

impl Default for SaveOptions {
    fn default() -> Self {
        SaveOptions {
            output_prefix: "OUTPUT".to_string(),
        }
    }
}

impl SaveOptions {
    pub fn output_name(&self, index: usize) -> String {
        format!("{}{}", self.output_prefix, index)
    }
}

/// Saves `model` into `dir` with the default [`SaveOptions`].
pub fn save_model_version<M, S>(
    dir: impl AsRef<Path>,
    model: &mut M,
    serializer: &S,
) -> Result<ModelVersionPaths, IrError>
where
    M: IrModel,
    S: IrSerializer<M>,
{
    save_model_version_with(dir, model, serializer, &SaveOptions::default())
}

/// Names every output, creates `dir` if needed and hands the model to the
/// serializer for `dir/model.xml` and `dir/model.bin`.
///
/// A model without outputs is rejected before anything touches the disk.
///
/// Outputs are renamed in place, in index order. If naming output `k`
/// fails, outputs `0..k` keep their new names even though an error is
/// returned.
pub fn save_model_version_with<M, S>(
    dir: impl AsRef<Path>,
    model: &mut M,
    serializer: &S,
    options: &SaveOptions,
) -> Result<ModelVersionPaths, IrError>
where
    M: IrModel,
    S: IrSerializer<M>,
{
    let paths = ModelVersionPaths::new(dir);

    let outputs = model.output_count();
    if outputs == 0 {
        return Err(IrError::NoOutputs);
    }
    for index in 0..outputs {
        let name = options.output_name(index);
        debug!("Naming output {} '{}'", index, name);
        model
            .set_output_names(index, BTreeSet::from([name]))
            .map_err(|source| IrError::Tagging { index, source })?;
    }

    fs::create_dir_all(&paths.dir).map_err(|source| IrError::CreateDir {
        path: paths.dir.clone(),
        source,
    })?;

    serializer
        .serialize(model, &paths.structure, &paths.weights)
        .map_err(|source| IrError::Serialize {
            structure: paths.structure.clone(),
            weights: paths.weights.clone(),
            source,
        })?;

    info!(
        "Saved model version with {} output(s) to {}",
        outputs,
        paths.dir.display()
    );
    Ok(paths)
}
