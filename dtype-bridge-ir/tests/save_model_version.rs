use dtype_bridge_ir::{
    save_model_version, save_model_version_with, ExternalError, IrError, IrModel, IrSerializer,
    SaveOptions, STRUCTURE_FILE, WEIGHTS_FILE,
};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Minimal stand-in for a toolkit model: output names plus raw weights.
struct TinyModel {
    outputs: Vec<BTreeSet<String>>,
    weights: Vec<u8>,
}

impl IrModel for TinyModel {
    fn output_count(&self) -> usize {
        self.outputs.len()
    }

    fn set_output_names(
        &mut self,
        index: usize,
        names: BTreeSet<String>,
    ) -> Result<(), ExternalError> {
        self.outputs[index] = names;
        Ok(())
    }
}

/// Writes the output names as a tiny XML document and the weights verbatim.
struct TinySerializer;

impl IrSerializer<TinyModel> for TinySerializer {
    fn serialize(
        &self,
        model: &TinyModel,
        structure: &Path,
        weights: &Path,
    ) -> Result<(), ExternalError> {
        let mut xml = String::from("<net>\n");
        for names in &model.outputs {
            for name in names {
                xml.push_str(&format!("  <output name=\"{}\"/>\n", name));
            }
        }
        xml.push_str("</net>\n");
        fs::write(structure, xml)?;
        fs::write(weights, &model.weights)?;
        Ok(())
    }
}

struct FailingSerializer;

impl IrSerializer<TinyModel> for FailingSerializer {
    fn serialize(&self, _: &TinyModel, _: &Path, _: &Path) -> Result<(), ExternalError> {
        Err("unsupported operation in graph".into())
    }
}

fn tiny_model(outputs: usize) -> TinyModel {
    TinyModel {
        outputs: vec![BTreeSet::from(["unnamed".to_string()]); outputs],
        weights: vec![1, 2, 3, 4],
    }
}

#[test]
fn test_writes_exactly_two_artifacts() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("model_repo").join("vision").join("1");
    let mut model = tiny_model(2);

    let paths = save_model_version(&dir, &mut model, &TinySerializer).unwrap();

    assert_eq!(paths.structure, dir.join(STRUCTURE_FILE));
    assert_eq!(paths.weights, dir.join(WEIGHTS_FILE));
    let mut entries: Vec<String> = fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    entries.sort();
    assert_eq!(entries, vec!["model.bin", "model.xml"]);
    assert_eq!(fs::read(&paths.weights).unwrap(), vec![1, 2, 3, 4]);
}

#[test]
fn test_outputs_are_renamed() {
    let root = tempfile::tempdir().unwrap();
    let mut model = tiny_model(3);

    let paths = save_model_version(root.path(), &mut model, &TinySerializer).unwrap();

    for (i, names) in model.outputs.iter().enumerate() {
        assert_eq!(names, &BTreeSet::from([format!("OUTPUT{}", i)]));
    }
    let xml = fs::read_to_string(&paths.structure).unwrap();
    assert!(xml.contains("name=\"OUTPUT0\""));
    assert!(xml.contains("name=\"OUTPUT2\""));
    assert!(!xml.contains("unnamed"));
}

#[test]
fn test_existing_directory_is_reused() {
    let root = tempfile::tempdir().unwrap();
    let mut model = tiny_model(1);
    save_model_version(root.path(), &mut model, &TinySerializer).unwrap();
    // Second save over the same version overwrites in place.
    model.weights = vec![9];
    let paths = save_model_version(root.path(), &mut model, &TinySerializer).unwrap();
    assert_eq!(fs::read(&paths.weights).unwrap(), vec![9]);
}

#[test]
fn test_custom_prefix() {
    let root = tempfile::tempdir().unwrap();
    let mut model = tiny_model(1);
    let options = SaveOptions {
        output_prefix: "SCORES".to_string(),
    };
    save_model_version_with(root.path(), &mut model, &TinySerializer, &options).unwrap();
    assert_eq!(model.outputs[0], BTreeSet::from(["SCORES0".to_string()]));
}

#[test]
fn test_directory_creation_failure() {
    let root = tempfile::tempdir().unwrap();
    let blocker = root.path().join("not_a_dir");
    fs::write(&blocker, b"file").unwrap();
    let mut model = tiny_model(1);

    let err = save_model_version(blocker.join("1"), &mut model, &TinySerializer).unwrap_err();
    match err {
        IrError::CreateDir { path, .. } => assert_eq!(path, blocker.join("1")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_serializer_failure_is_wrapped() {
    let root = tempfile::tempdir().unwrap();
    let mut model = tiny_model(1);

    let err = save_model_version(root.path(), &mut model, &FailingSerializer).unwrap_err();
    assert!(matches!(err, IrError::Serialize { .. }));
    assert!(err.to_string().contains("model.xml"));
}
