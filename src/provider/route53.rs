use serde::Serialize;

use crate::record::{RawRecord, RecordGroup, RecordType};

pub const ZONE_DATA_SOURCE: &str = "aws_route53_zone";
pub const RECORD_RESOURCE: &str = "aws_route53_record";

/// Terraform identifiers may not contain dots.
pub fn sanitize_identifier(s: &str) -> String {
    s.replace('.', "_")
}

/// Reference to the hosted zone's id, rendered as a Terraform interpolation.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneRef {
    pub(super) zone_resource: String,
}

/// Zone lookup (`data "aws_route53_zone"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route53Zone {
    #[serde(skip)]
    pub id: String,

    pub name: String,
}

impl Route53Zone {
    pub fn new(zone_name: &str) -> Self {
        Self {
            id: sanitize_identifier(zone_name),
            name: zone_name.to_string(),
        }
    }

    pub fn zone_id(&self) -> ZoneRef {
        ZoneRef {
            zone_resource: self.id.clone(),
        }
    }
}

/// One `resource "aws_route53_record"` per owner name and type.
///
/// Fields are declared in the order Terraform JSON keys are emitted (sorted).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route53Record {
    #[serde(skip)]
    pub id: String,

    pub name: String,
    pub records: Vec<String>,
    pub ttl: u32,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub zone_id: ZoneRef,
}

impl Route53Record {
    pub fn from_group(zone: &Route53Zone, group: &RecordGroup) -> Self {
        let id = sanitize_identifier(&format!(
            "{}_{}_{}",
            group.name, zone.name, group.record_type
        ));

        Self {
            id,
            name: fqdn(&group.name, &zone.name),
            records: record_values(&group.records),
            ttl: min_ttl(&group.records),
            record_type: group.record_type,
            zone_id: zone.zone_id(),
        }
    }
}

fn fqdn(name: &str, zone_name: &str) -> String {
    [name, zone_name]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

// Route 53 holds one TTL per record set; the shortest one wins.
fn min_ttl(records: &[RawRecord]) -> u32 {
    records.iter().map(|r| r.ttl).min().unwrap_or_default()
}

// Priority is only rendered when every record of the set has the key.
fn record_values(records: &[RawRecord]) -> Vec<String> {
    let priorities: Option<Vec<Option<i64>>> = records.iter().map(|r| r.priority).collect();

    match priorities {
        Some(priorities) => records
            .iter()
            .zip(priorities)
            .map(|(r, priority)| priority_value(priority, &r.target))
            .collect(),
        None => records.iter().map(|r| r.target.clone()).collect(),
    }
}

// A null or zero priority and an empty target are left out.
fn priority_value(priority: Option<i64>, target: &str) -> String {
    let priority = priority.filter(|p| *p != 0).map(|p| p.to_string());
    let target = (!target.is_empty()).then(|| target.to_string());

    priority
        .into_iter()
        .chain(target)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fqdn() {
        assert_eq!(fqdn("www", "example.com"), "www.example.com");
        assert_eq!(fqdn("", "example.com"), "example.com");
    }

    #[test]
    fn test_priority_value_drops_empty_parts() {
        assert_eq!(priority_value(Some(10), "mail."), "10 mail.");
        assert_eq!(priority_value(Some(0), "mail."), "mail.");
        assert_eq!(priority_value(None, "mail."), "mail.");
        assert_eq!(priority_value(Some(5), ""), "5");
    }

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("www_example.com_A"), "www_example_com_A");
        assert_eq!(sanitize_identifier("no-dots"), "no-dots");
    }
}
