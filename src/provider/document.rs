use std::collections::BTreeMap;
use std::io::Write;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::Result;

use super::route53::{RECORD_RESOURCE, Route53Record, Route53Zone, ZONE_DATA_SOURCE};

/// Terraform JSON configuration holding one zone lookup and its record sets.
#[derive(Debug, Clone, PartialEq)]
pub struct TerraformDocument {
    zone: Route53Zone,
    records: BTreeMap<String, Route53Record>,
}

impl TerraformDocument {
    pub fn new(zone: Route53Zone) -> Self {
        Self {
            zone,
            records: BTreeMap::new(),
        }
    }

    pub fn zone(&self) -> &Route53Zone {
        &self.zone
    }

    pub fn records(&self) -> impl Iterator<Item = &Route53Record> {
        self.records.values()
    }

    pub fn record(&self, id: &str) -> Option<&Route53Record> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Adds a record set. A record with the same identifier is replaced.
    pub fn add(&mut self, record: Route53Record) {
        if let Some(prev) = self.records.insert(record.id.clone(), record) {
            log::warn!(
                "resource {} defined twice, keeping the last one (dropped {} {})",
                prev.id,
                prev.record_type,
                prev.name
            );
        }
    }

    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(self.to_json()?.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

impl Serialize for TerraformDocument {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let zones = BTreeMap::from([(self.zone.id.as_str(), &self.zone)]);
        let data = BTreeMap::from([(ZONE_DATA_SOURCE, zones)]);

        let len = if self.records.is_empty() { 1 } else { 2 };
        let mut state = serializer.serialize_map(Some(len))?;
        state.serialize_entry("data", &data)?;
        if !self.records.is_empty() {
            let resource = BTreeMap::from([(RECORD_RESOURCE, &self.records)]);
            state.serialize_entry("resource", &resource)?;
        }
        state.end()
    }
}
