use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};

use super::ZoneName;

/// A zone as returned by `GET /config-dns/v1/zones/{zone}`.
///
/// FastDNS mixes zone metadata and record sets into one object, and not
/// every entry is a record list (`soa` is an object), so entries stay
/// untyped until normalisation picks the ones it understands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawZone {
    pub name: ZoneName,

    #[serde(flatten)]
    pub entries: BTreeMap<String, JsonValue>,
}

#[derive(Deserialize)]
struct ZoneEnvelope {
    zone: RawZone,
}

impl RawZone {
    pub fn from_json(body: &str) -> Result<Self> {
        let envelope: ZoneEnvelope = serde_json::from_str(body)
            .map_err(|e| Error::Parse(format!("unexpected zone response: {}", e)))?;
        Ok(envelope.zone)
    }
}

/// One record entry. Provider bookkeeping fields are not kept.
///
/// `priority` is `None` when the key is absent and `Some(None)` when it is
/// present but `null`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    pub name: String,
    pub ttl: u32,
    pub target: String,

    #[serde(default, deserialize_with = "present")]
    pub priority: Option<Option<i64>>,
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Some)
}
