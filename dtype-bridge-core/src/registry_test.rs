use super::*;

#[cfg(feature = "model-config")]
#[test]
fn test_config_string_scenarios() {
    let registry = DtypeRegistry::new();
    assert_eq!(
        registry.to_config_string(CanonicalDtype::Bool).map(|t| t.as_str()),
        Some("TYPE_BOOL")
    );
    assert_eq!(
        registry.to_config_string(CanonicalDtype::BFloat16).map(|t| t.as_str()),
        Some("TYPE_BF16")
    );
}

#[test]
fn test_uint16_has_no_framework_type() {
    let registry = DtypeRegistry::new();
    assert_eq!(registry.to_framework_type(CanonicalDtype::UInt16), None);
}

#[cfg(feature = "onnx")]
#[test]
fn test_string_serialization_format() {
    let registry = DtypeRegistry::new();
    let ty = registry.to_serialization_format(CanonicalDtype::String);
    assert_eq!(ty, Some(OnnxDataType::String));
    assert_eq!(ty.map(OnnxDataType::code), Some(8));
}

#[cfg(feature = "tensorrt")]
#[test]
fn test_bfloat16_runtime_but_not_serialization() {
    let registry = DtypeRegistry::new();
    assert_eq!(registry.to_runtime_type(CanonicalDtype::BFloat16), Some(TrtDataType::Bf16));
    assert_eq!(registry.to_serialization_format(CanonicalDtype::BFloat16), None);
}

#[test]
fn test_no_widening() {
    let registry = DtypeRegistry::new();
    assert_eq!(registry.to_runtime_type(CanonicalDtype::UInt16), None);
    assert_eq!(registry.to_runtime_type(CanonicalDtype::Int16), None);
    assert_eq!(registry.to_runtime_type(CanonicalDtype::Float64), None);
}

#[test]
fn test_lookup_matches_named_operations() {
    let registry = DtypeRegistry::new();
    for dtype in CanonicalDtype::ALL {
        assert_eq!(registry.lookup::<Onnx>(dtype), registry.to_serialization_format(dtype));
        assert_eq!(registry.lookup::<ModelConfig>(dtype), registry.to_config_string(dtype));
        assert_eq!(registry.lookup::<TensorRt>(dtype), registry.to_runtime_type(dtype));
        assert_eq!(registry.lookup::<Torch>(dtype), registry.to_framework_type(dtype));
    }
}

#[cfg(all(feature = "onnx", feature = "model-config", feature = "tensorrt"))]
#[test]
fn test_supported_lists() {
    let registry = DtypeRegistry::new();
    assert_eq!(registry.supported::<ModelConfig>(), CanonicalDtype::ALL.to_vec());
    assert_eq!(
        registry.supported::<TensorRt>(),
        vec![
            CanonicalDtype::Bool,
            CanonicalDtype::Int8,
            CanonicalDtype::Int32,
            CanonicalDtype::Int64,
            CanonicalDtype::UInt8,
            CanonicalDtype::Float16,
            CanonicalDtype::Float32,
            CanonicalDtype::BFloat16,
        ]
    );
    assert!(!registry.supported::<Onnx>().contains(&CanonicalDtype::BFloat16));
    assert_eq!(registry.supported::<Onnx>().len(), 11);
}

#[test]
fn test_table_has_one_entry_per_dtype() {
    let registry = DtypeRegistry::new();
    let table = registry.table::<Torch>();
    assert_eq!(table.len(), CanonicalDtype::COUNT);
    for (i, (dtype, _)) in table.iter().enumerate() {
        assert_eq!(dtype.ordinal(), i);
    }
}

#[cfg(feature = "torch")]
#[test]
fn test_string_framework_type_is_list() {
    let table = DtypeRegistry::new().table::<Torch>();
    assert_eq!(table[CanonicalDtype::String.ordinal()].1, Some(TorchType::StringList));
}

#[cfg(all(feature = "model-config", feature = "tensorrt"))]
#[test]
fn test_support_matrix_rows() {
    let matrix = DtypeRegistry::new().support_matrix();
    assert_eq!(matrix.rows().len(), CanonicalDtype::COUNT);

    let bf16 = matrix.row(CanonicalDtype::BFloat16);
    assert!(!bf16.serialization_format);
    assert!(bf16.config_string);
    assert!(bf16.runtime_type);
    assert!(!bf16.framework_type);

    let rendered = matrix.to_string();
    assert!(rendered.starts_with("dtype"));
    assert_eq!(rendered.lines().count(), CanonicalDtype::COUNT + 1);
    assert!(rendered.contains("bf16"));
}

fn assert_helpers_agree_with_lookup<T: DtypeTarget>(registry: &DtypeRegistry) {
    let table = registry.table::<T>();
    let supported = registry.supported::<T>();
    for (dtype, repr) in table {
        assert_eq!(repr, registry.lookup::<T>(dtype));
        assert_eq!(registry.is_supported::<T>(dtype), repr.is_some());
        assert_eq!(supported.contains(&dtype), repr.is_some());
    }
}

#[test]
fn test_table_helpers_agree_with_lookup() {
    let registry = DtypeRegistry::new();
    assert_helpers_agree_with_lookup::<Onnx>(&registry);
    assert_helpers_agree_with_lookup::<ModelConfig>(&registry);
    assert_helpers_agree_with_lookup::<TensorRt>(&registry);
    assert_helpers_agree_with_lookup::<Torch>(&registry);
}
