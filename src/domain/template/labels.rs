use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::{debug, warn};

const METADATA: &str = "metadata";
const LABELS: &str = "labels";

/// Where the labels of one object end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LabelTarget {
    /// `metadata.labels`, created as needed.
    Metadata,
    /// Existing top-level `labels` of an object without `metadata`.
    TopLevel,
}

/// Merge `labels` into every object, overwriting colliding keys.
///
/// `metadata.labels` is used whenever the object has a `metadata` field;
/// a top-level `labels` map is only used when there is no `metadata`.
/// Nothing is created when `labels` is empty.
pub fn inject_labels(objects: &mut [Value], labels: &BTreeMap<String, String>) {
    if labels.is_empty() {
        return;
    }
    for (index, object) in objects.iter_mut().enumerate() {
        match object {
            Value::Object(fields) => inject_object_labels(index, fields, labels),
            _ => debug!(index, "skipping non-object entry during label injection"),
        }
    }
}

fn inject_object_labels(index: usize, object: &mut Map<String, Value>, labels: &BTreeMap<String, String>) {
    let target = label_target(object);
    let merged = match target {
        LabelTarget::Metadata => {
            let metadata = object.entry(METADATA).or_insert(Value::Null);
            if metadata.is_null() {
                *metadata = Value::Object(Map::new());
            }
            match metadata {
                Value::Object(metadata) => merge_into_slot(metadata, labels),
                _ => false,
            }
        }
        LabelTarget::TopLevel => merge_into_slot(object, labels),
    };

    if merged {
        debug!(index, ?target, count = labels.len(), "merged object labels");
    } else {
        warn!(index, ?target, "object has a malformed metadata or labels field; labels not applied");
    }
}

fn label_target(object: &Map<String, Value>) -> LabelTarget {
    if object.contains_key(METADATA) {
        return LabelTarget::Metadata;
    }
    match object.get(LABELS) {
        Some(Value::Null) | None => LabelTarget::Metadata,
        Some(_) => LabelTarget::TopLevel,
    }
}

/// Merge into `container.labels`, creating it when absent or null.
/// Returns false when the slot holds something other than a map.
fn merge_into_slot(container: &mut Map<String, Value>, labels: &BTreeMap<String, String>) -> bool {
    let slot = container.entry(LABELS).or_insert(Value::Null);
    if slot.is_null() {
        *slot = Value::Object(Map::new());
    }
    let Value::Object(existing) = slot else {
        return false;
    };
    for (key, value) in labels {
        existing.insert(key.clone(), Value::String(value.clone()));
    }
    true
}
