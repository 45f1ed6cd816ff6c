use std::path::PathBuf;

use gatenet::{logic_dataset, train_logic, Error, Parameters, TrainConfig, WeightsRecord};
use gatenet::network::record::save_weights_json;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("gatenet_{}_{}", std::process::id(), name))
}

#[test]
fn test_record_round_trip_in_memory() {
    let params = Parameters::init(4, 42).unwrap();
    let record = WeightsRecord::from_parameters(&params, None);

    let restored = record.to_parameters().unwrap();

    assert_eq!(restored.w1.data, params.w1.data);
    assert_eq!(restored.b1.data, params.b1.data);
    assert_eq!(restored.w2.data, params.w2.data);
    assert_eq!(restored.b2.data, params.b2.data);
}

#[test]
fn test_record_round_trip_through_json_file() {
    let path = temp_path("record_roundtrip.json");
    let dataset = logic_dataset();
    let trained = train_logic(&dataset, &TrainConfig::new(4, 100, 0.8, 42)).unwrap();

    let record = WeightsRecord::from_parameters(&trained.params, Some(trained.predictions.clone()));
    record.save_json(&path).unwrap();
    let loaded = WeightsRecord::load_json(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.predictions, Some(trained.predictions));

    let restored = loaded.to_parameters().unwrap();
    for (restored_tensor, saved_tensor) in [
        (&restored.w1, &trained.params.w1),
        (&restored.b1, &trained.params.b1),
        (&restored.w2, &trained.params.w2),
        (&restored.b2, &trained.params.b2),
    ] {
        for (row_r, row_o) in restored_tensor.data.iter().zip(saved_tensor.data.iter()) {
            for (r, o) in row_r.iter().zip(row_o.iter()) {
                assert!(
                    (r - o).abs() < 1e-12,
                    "tensor value drifted through JSON: {} vs {}",
                    r,
                    o
                );
            }
        }
    }
}

#[test]
fn test_record_uses_uppercase_weight_keys() {
    let params = Parameters::init(2, 42).unwrap();
    let record = WeightsRecord::from_parameters(&params, None);

    let json = serde_json::to_string(&record).unwrap();

    for key in ["\"W1\"", "\"b1\"", "\"W2\"", "\"b2\""] {
        assert!(json.contains(key), "missing key {} in {}", key, json);
    }
    assert!(!json.contains("predictions"), "absent predictions must not be serialized");
}

#[test]
fn test_baseline_json_is_two_space_indented() {
    let path = temp_path("baseline_indent.json");
    let params = Parameters::init(4, 42).unwrap();
    let record = WeightsRecord::from_parameters(&params, None);

    record.save_json(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(text.starts_with("{\n  \"W1\""), "expected 2-space indentation, got: {}", &text[..20.min(text.len())]);
}

#[test]
fn test_save_does_not_leave_temp_file() {
    let path = temp_path("baseline_no_tmp.json");
    let params = Parameters::init(4, 42).unwrap();
    let record = WeightsRecord::from_parameters(&params, None);

    record.save_json(&path).unwrap();

    let mut tmp = path.clone().into_os_string();
    tmp.push(".tmp");
    assert!(!PathBuf::from(tmp).exists(), "temporary file must be renamed away");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_flat_weights_baseline_is_a_json_array() {
    let path = temp_path("flat_baseline.json");
    let weights = vec![0.25, -0.5, 0.125];

    save_weights_json(&path, &weights).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let parsed: Vec<f64> = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, weights);
    assert!(text.starts_with("[\n  "), "expected a pretty-printed array");
}

#[test]
fn test_record_with_bad_shapes_is_rejected() {
    let params = Parameters::init(4, 42).unwrap();

    // W2 rows must equal the hidden width implied by W1.
    let mut record = WeightsRecord::from_parameters(&params, None);
    record.w2 = vec![vec![0.0, 0.0, 0.0]; 3];
    assert!(matches!(record.to_parameters(), Err(Error::Configuration(_))));

    // Ragged tensor.
    let mut record = WeightsRecord::from_parameters(&params, None);
    record.w1[1] = vec![0.0];
    assert!(matches!(record.to_parameters(), Err(Error::Configuration(_))));

    // Empty tensor.
    let mut record = WeightsRecord::from_parameters(&params, None);
    record.b1 = Vec::new();
    assert!(matches!(record.to_parameters(), Err(Error::Configuration(_))));
}
