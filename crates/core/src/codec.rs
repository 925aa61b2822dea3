use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};
use crate::order::compare_names;
use crate::snapshot::OrderedSnapshot;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct Document {
    version: u32,
    entries: Vec<Record>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct Record {
    name: String,
    value: u64,
}

/// Encodes `snapshot` as a JSON document with entries in snapshot order.
pub fn encode(snapshot: &OrderedSnapshot) -> Result<Vec<u8>> {
    let doc = Document {
        version: FORMAT_VERSION,
        entries: snapshot
            .iter()
            .map(|(name, value)| Record {
                name: name.to_string(),
                value,
            })
            .collect(),
    };
    Ok(serde_json::to_vec(&doc)?)
}

/// Rebuilds a snapshot from [`encode`] output.
///
/// The entries must be strictly ascending under [`compare_names`]; anything
/// else, including truncated input, is a [`ScanError::Decode`].
pub fn decode(bytes: &[u8]) -> Result<OrderedSnapshot> {
    let doc: Document =
        serde_json::from_slice(bytes).map_err(|e| ScanError::Decode(e.to_string()))?;
    if doc.version != FORMAT_VERSION {
        return Err(ScanError::Decode(format!(
            "unsupported version {} (expected {FORMAT_VERSION})",
            doc.version
        )));
    }

    let mut snapshot = OrderedSnapshot::new();
    let mut prev: Option<&str> = None;
    for record in &doc.entries {
        if let Some(prev) = prev {
            match compare_names(prev, &record.name) {
                Ordering::Less => {}
                Ordering::Equal => {
                    return Err(ScanError::Decode(format!("duplicate entry '{}'", record.name)))
                }
                Ordering::Greater => {
                    return Err(ScanError::Decode(format!(
                        "entry '{}' out of order after '{prev}'",
                        record.name
                    )))
                }
            }
        }
        snapshot.insert(record.name.as_str(), record.value)?;
        prev = Some(&record.name);
    }
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OrderedSnapshot {
        let mut snap = OrderedSnapshot::new();
        for (name, value) in [("bb", 20), ("a", 10), ("c", 0), ("zażółć.txt", u64::MAX)] {
            snap.insert(name, value).unwrap();
        }
        snap
    }

    #[test]
    fn round_trip_preserves_pairs_and_order() {
        let snap = sample();
        let back = decode(&encode(&snap).unwrap()).unwrap();
        assert_eq!(back.iter().collect::<Vec<_>>(), snap.iter().collect::<Vec<_>>());
        assert_eq!(back, snap);
    }

    #[test]
    fn empty_snapshot_round_trips() {
        let back = decode(&encode(&OrderedSnapshot::new()).unwrap()).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn truncated_input_fails() {
        let bytes = encode(&sample()).unwrap();
        for cut in [0, 1, bytes.len() / 2, bytes.len() - 1] {
            let err = decode(&bytes[..cut]).unwrap_err();
            assert!(matches!(err, ScanError::Decode(_)), "cut at {cut}");
        }
    }

    #[test]
    fn rejects_out_of_order_and_duplicates() {
        let unordered = br#"{"version":1,"entries":[{"name":"bb","value":1},{"name":"a","value":2}]}"#;
        assert!(matches!(decode(unordered), Err(ScanError::Decode(_))));

        let dup = br#"{"version":1,"entries":[{"name":"a","value":1},{"name":"a","value":2}]}"#;
        assert!(matches!(decode(dup), Err(ScanError::Decode(m)) if m.contains("duplicate")));
    }

    #[test]
    fn rejects_unknown_version_and_bad_values() {
        let v2 = br#"{"version":2,"entries":[]}"#;
        assert!(matches!(decode(v2), Err(ScanError::Decode(_))));

        let negative = br#"{"version":1,"entries":[{"name":"a","value":-1}]}"#;
        assert!(matches!(decode(negative), Err(ScanError::Decode(_))));
    }
}
