use std::collections::BTreeMap;

use serde_json::Value as JsonValue;

use crate::error::{Error, Result};

use super::{IGNORED_METADATA, IGNORED_RRTYPES, RawRecord, RawZone, RecordType};

/// Records sharing one owner name and one type.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordGroup {
    pub name: String,
    pub record_type: RecordType,
    pub records: Vec<RawRecord>,
}

/// Splits a zone into per-(name, type) groups.
///
/// Metadata keys and zone infrastructure types are dropped, unhandled
/// types are skipped with a warning. Groups come out ordered by type key
/// then owner name.
pub fn normalize(zone: &RawZone) -> Result<Vec<RecordGroup>> {
    let mut groups = Vec::new();

    for (key, value) in &zone.entries {
        if IGNORED_METADATA.contains(&key.as_str()) {
            continue;
        }

        let rrtype = key.to_uppercase();
        if IGNORED_RRTYPES.contains(&rrtype.as_str()) {
            log::debug!("ignored record type {}", rrtype);
            continue;
        }

        if is_empty(value) {
            continue;
        }

        let Some(record_type) = RecordType::from_label(&rrtype) else {
            log::warn!("unhandled record type {}", rrtype);
            continue;
        };

        let records: Vec<RawRecord> = serde_json::from_value(value.clone())
            .map_err(|e| Error::Parse(format!("malformed {} records: {}", rrtype, e)))?;

        groups.extend(group_by_name(record_type, records));
    }

    Ok(groups)
}

fn group_by_name(record_type: RecordType, records: Vec<RawRecord>) -> Vec<RecordGroup> {
    let mut by_name: BTreeMap<String, Vec<RawRecord>> = BTreeMap::new();
    for record in records {
        by_name.entry(record.name.clone()).or_default().push(record);
    }

    by_name
        .into_iter()
        .map(|(name, records)| RecordGroup {
            name,
            record_type,
            records,
        })
        .collect()
}

// Anything that carries no records: null, empty list, empty object, "", 0, false.
fn is_empty(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::Bool(b) => !b,
        JsonValue::Number(n) => n.as_f64() == Some(0.0),
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(a) => a.is_empty(),
        JsonValue::Object(o) => o.is_empty(),
    }
}
