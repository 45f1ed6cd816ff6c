use std::cell::RefCell;
use std::path::{Path, PathBuf};

use gatenet::{CommandIngestor, Error, Ingestor, Parameters, TensorPayload};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("gatenet_{}_{}", std::process::id(), name))
}

#[test]
fn test_payload_file_has_header_and_values() {
    let path = temp_path("payload_basic.txt");
    let payload = TensorPayload::new(9001, "logic_net", 1);

    payload.write(&path, &[0.5, -0.25, 1.0]).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2, "payload must be exactly two lines");
    assert_eq!(lines[0], "9001,logic_net,1,3");
    assert_eq!(lines[1], "0.500000,-0.250000,1.000000");
}

#[test]
fn test_payload_values_have_six_decimal_digits() {
    let path = temp_path("payload_precision.txt");
    let payload = TensorPayload::new(1, "t", 1);
    let params = Parameters::init(4, 42).unwrap();
    let flat = params.flatten();

    payload.write(&path, &flat).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    let values: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(values.len(), flat.len());
    assert_eq!(lines[0], format!("1,t,1,{}", flat.len()));

    for token in values {
        let fraction = token.split('.').nth(1).unwrap_or("");
        assert_eq!(
            fraction.len(),
            6,
            "value '{}' must carry exactly 6 fractional digits",
            token
        );
    }
}

#[test]
fn test_payload_cols_match_flatten_length() {
    let path = temp_path("payload_cols.txt");
    for hidden in [1, 4] {
        let params = Parameters::init(hidden, 42).unwrap();
        let flat = params.flatten();
        TensorPayload::new(7, "net", 1).write(&path, &flat).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let header: Vec<&str> = text.lines().next().unwrap().split(',').collect();
        assert_eq!(header[3].parse::<usize>().unwrap(), 6 * hidden + 3);
    }
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_executable_is_detected_up_front() {
    let ingestor = CommandIngestor::new(temp_path("no_such_executable"));

    match ingestor.check() {
        Err(Error::MissingExecutable(path)) => {
            assert!(path.ends_with(temp_path("no_such_executable").file_name().unwrap()));
        }
        other => panic!("expected MissingExecutable, got {:?}", other.err()),
    }
}

#[test]
fn test_closure_ingestor_observes_payload_path() {
    let seen: RefCell<Option<PathBuf>> = RefCell::new(None);
    let mock = |path: &Path| -> gatenet::Result<()> {
        *seen.borrow_mut() = Some(path.to_path_buf());
        Ok(())
    };

    let payload_path = temp_path("payload_mock.txt");
    TensorPayload::new(2, "mock", 1).write(&payload_path, &[0.0]).unwrap();
    (&mock as &dyn Ingestor).ingest(&payload_path).unwrap();
    std::fs::remove_file(&payload_path).unwrap();

    assert_eq!(seen.borrow().as_deref(), Some(payload_path.as_path()));
}

#[test]
fn test_ingest_failure_propagates() {
    let failing = |_: &Path| -> gatenet::Result<()> {
        Err(Error::IngestFailure { code: Some(3) })
    };

    let result = (&failing as &dyn Ingestor).ingest(Path::new("whatever.txt"));

    match result {
        Err(Error::IngestFailure { code }) => assert_eq!(code, Some(3)),
        other => panic!("expected IngestFailure, got {:?}", other.err()),
    }
}
