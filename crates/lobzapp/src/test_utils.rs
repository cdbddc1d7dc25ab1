//! Shared fixtures for unit and integration tests.

use crate::catalog::CatalogIndex;
use crate::collection::RecordCollection;
use crate::model::ObjectiveRecord;

pub const SAMPLE_CATALOG_JSON: &str = r#"{
    "levels": {
        "1": { "display_name": "Remember", "verbs": { "0": "define", "1": "list", "2": "recall" } },
        "2": { "display_name": "Understand", "verbs": { "0": "explain", "1": "describe" } },
        "3": { "display_name": "Apply", "verbs": { "0": "apply", "1": "use", "2": "solve" } }
    },
    "ABET": {
        "0": "an ability to identify, formulate, and solve complex engineering problems",
        "1": "an ability to apply engineering design to produce solutions",
        "2": "an ability to communicate effectively with a range of audiences"
    }
}"#;

pub fn sample_catalog() -> CatalogIndex {
    CatalogIndex::from_json_str(SAMPLE_CATALOG_JSON).expect("sample catalog is valid")
}

/// A record tagged with outcome `"0"`.
pub fn record(level: &str, verb: &str, condition: &str, task: &str, degree: &str) -> ObjectiveRecord {
    ObjectiveRecord::new(level, verb, condition, task, degree, ["0"]).expect("fixture record is valid")
}

/// A record identified by its task, for order-sensitive tests.
pub fn named(task: &str) -> ObjectiveRecord {
    record("1", "0", "", task, "")
}

/// A collection of [`named`] records, in the given order.
pub fn collection_of(tasks: &[&str]) -> RecordCollection {
    let mut collection = RecordCollection::new();
    for task in tasks {
        collection.add(named(task));
    }
    collection
}

/// Tasks of the collection's records, in order.
pub fn tasks(collection: &RecordCollection) -> Vec<String> {
    collection.iter().map(|r| r.task().to_string()).collect()
}
