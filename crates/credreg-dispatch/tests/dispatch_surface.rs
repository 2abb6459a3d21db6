//! End-to-end exercise of the external string-argument surface against
//! an in-memory store: the full metered-access lifecycle of one degree
//! record, plus the failure modes visible at the dispatch boundary.

use credreg_dispatch::{dispatch, DispatchError};
use credreg_engine::EngineError;
use credreg_store::MemoryStore;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn remaining_views(payload: &[u8]) -> i64 {
    let value: serde_json::Value = serde_json::from_slice(payload).unwrap();
    value["allowedviews"].as_i64().unwrap()
}

#[test]
fn test_metered_access_lifecycle() {
    let mut store = MemoryStore::new();

    // create(1, "Jane Doe", "MIT", 4, 2020, 3.9, 2)
    let created = dispatch(
        &mut store,
        "createDegree",
        &args(&["1", "Jane Doe", "MIT", "4", "2020", "3.9", "2"]),
    )
    .unwrap();
    assert!(created.is_none());

    // Two authorized views, each observing the pre-decrement count.
    let first = dispatch(&mut store, "viewDegree", &args(&["1"])).unwrap().unwrap();
    assert_eq!(remaining_views(&first), 2);

    let second = dispatch(&mut store, "viewDegree", &args(&["1"])).unwrap().unwrap();
    assert_eq!(remaining_views(&second), 1);

    // Third view is forbidden: the counter is exhausted.
    match dispatch(&mut store, "viewDegree", &args(&["1"])) {
        Err(DispatchError::Engine(EngineError::Forbidden { .. })) => {}
        other => panic!("expected Forbidden, got: {other:?}"),
    }

    // Top up by 3 and view again.
    dispatch(&mut store, "invokeDegreeAccess", &args(&["1", "3"])).unwrap();
    let third = dispatch(&mut store, "viewDegree", &args(&["1"])).unwrap().unwrap();
    assert_eq!(remaining_views(&third), 3);

    // Revoke, then no view is authorized.
    dispatch(&mut store, "revokeAccess", &args(&["1"])).unwrap();
    assert!(matches!(
        dispatch(&mut store, "viewDegree", &args(&["1"])),
        Err(DispatchError::Engine(EngineError::Forbidden { .. }))
    ));
}

#[test]
fn test_snapshot_payload_carries_normalized_record() {
    let mut store = MemoryStore::new();
    dispatch(
        &mut store,
        "createDegree",
        &args(&["42", "Muhammad Anas", "BU", "4", "2019", "3.42", "1"]),
    )
    .unwrap();

    let payload = dispatch(&mut store, "viewDegree", &args(&["42"])).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&payload).unwrap();
    assert_eq!(value["docType"], "degree");
    assert_eq!(value["degreeid"], 42);
    assert_eq!(value["studentname"], "muhammad anas");
    assert_eq!(value["institutename"], "bu");
    assert_eq!(value["passingyear"], 2019);
}

#[test]
fn test_duplicate_create_surfaces_already_exists() {
    let mut store = MemoryStore::new();
    let create = args(&["1", "Jane Doe", "MIT", "4", "2020", "3.9", "2"]);
    dispatch(&mut store, "createDegree", &create).unwrap();

    assert!(matches!(
        dispatch(&mut store, "createDegree", &create),
        Err(DispatchError::Engine(EngineError::AlreadyExists { .. }))
    ));
}

#[test]
fn test_operations_on_missing_id_surface_not_found() {
    let mut store = MemoryStore::new();
    for (operation, call_args) in [
        ("invokeDegreeAccess", args(&["9", "1"])),
        ("viewDegree", args(&["9"])),
        ("revokeAccess", args(&["9"])),
    ] {
        assert!(matches!(
            dispatch(&mut store, operation, &call_args),
            Err(DispatchError::Engine(EngineError::NotFound { .. }))
        ));
    }
    assert!(store.is_empty());
}

#[test]
fn test_validation_failure_never_reaches_the_store() {
    let mut store = MemoryStore::new();

    // Unknown operation
    assert!(matches!(
        dispatch(&mut store, "dropDegree", &args(&["1"])),
        Err(DispatchError::UnknownOperation(_))
    ));

    // Bad arity and bad argument types
    assert!(dispatch(&mut store, "createDegree", &args(&["1"])).is_err());
    assert!(dispatch(&mut store, "viewDegree", &args(&["one"])).is_err());

    assert!(store.is_empty());
}
