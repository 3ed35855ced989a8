use super::*;

use crate::error::Error;

fn zone(json: &str) -> RawZone {
    RawZone::from_json(json).unwrap()
}

fn keys(groups: &[RecordGroup]) -> Vec<(String, RecordType)> {
    groups
        .iter()
        .map(|g| (g.name.clone(), g.record_type))
        .collect()
}

const ZONE: &str = r#"{
    "zone": {
        "name": "example.com",
        "id": 1234,
        "instance": "a1b2",
        "publisher": "c3d4",
        "time": 1500000000000,
        "version": "v7",
        "soa": {"contact": "hostmaster.example.com.", "serial": 42, "ttl": 3600},
        "dnskey": [{"name": "", "ttl": 7200, "target": "key"}],
        "nsec3param": [{"name": "", "ttl": 0, "target": "x"}],
        "ns": [
            {"name": "", "ttl": 86400, "target": "a1.akam.net."},
            {"name": "", "ttl": 86400, "target": "a2.akam.net."}
        ],
        "a": [
            {"name": "www", "ttl": 300, "target": "1.2.3.4"},
            {"name": "", "ttl": 600, "target": "1.2.3.5"},
            {"name": "www", "ttl": 60, "target": "1.2.3.6"}
        ],
        "mx": [
            {"name": "", "ttl": 3600, "priority": 10, "target": "mail1.example.com."},
            {"name": "", "ttl": 3600, "priority": 20, "target": "mail2.example.com."}
        ],
        "caa": [{"name": "", "ttl": 300, "flags": 0, "tag": "issue", "value": "ca.example"}],
        "spf": [],
        "aaaa": []
    }
}"#;

#[test]
fn test_normalize_groups_by_name_and_type() {
    let groups = normalize(&zone(ZONE)).unwrap();
    assert_eq!(
        keys(&groups),
        vec![
            ("".to_string(), RecordType::A),
            ("www".to_string(), RecordType::A),
            ("".to_string(), RecordType::MX),
            ("".to_string(), RecordType::NS),
        ]
    );

    let www = &groups[1];
    assert_eq!(www.records.len(), 2);
    assert_eq!(www.records[0].target, "1.2.3.4");
    assert_eq!(www.records[1].target, "1.2.3.6");
    assert!(www.records.iter().all(|r| r.name == "www"));
}

#[test]
fn test_normalize_drops_metadata_and_ignored_types() {
    let groups = normalize(&zone(ZONE)).unwrap();
    for group in &groups {
        let label = group.record_type.as_str();
        assert!(!IGNORED_RRTYPES.contains(&label));
        assert!(!IGNORED_METADATA.contains(&label.to_lowercase().as_str()));
    }
}

#[test]
fn test_normalize_skips_unhandled_type() {
    let groups = normalize(&zone(ZONE)).unwrap();
    assert_eq!(groups.len(), 4);

    let only_caa = r#"{"zone": {"name": "example.com",
        "caa": [{"name": "", "ttl": 300, "flags": 0, "tag": "issue", "value": "ca.example"}]}}"#;
    assert!(normalize(&zone(only_caa)).unwrap().is_empty());
}

#[test]
fn test_normalize_uppercases_type_keys() {
    let json = r#"{"zone": {"name": "example.com",
        "Cname": [{"name": "ftp", "ttl": 300, "target": "www.example.com."}]}}"#;
    let groups = normalize(&zone(json)).unwrap();
    assert_eq!(keys(&groups), vec![("ftp".to_string(), RecordType::CNAME)]);
}

#[test]
fn test_normalize_empty_and_null_lists() {
    let json = r#"{"zone": {"name": "example.com", "a": [], "txt": null, "srv": {}}}"#;
    assert!(normalize(&zone(json)).unwrap().is_empty());
}

#[test]
fn test_normalize_malformed_supported_type() {
    let json = r#"{"zone": {"name": "example.com",
        "hinfo": [{"name": "host", "ttl": 300, "hardware": "x86", "software": "linux"}]}}"#;
    let err = normalize(&zone(json)).unwrap_err();
    assert!(matches!(err, Error::Parse(ref msg) if msg.contains("HINFO")));
}

#[test]
fn test_normalize_is_deterministic() {
    let z = zone(ZONE);
    assert_eq!(normalize(&z).unwrap(), normalize(&z).unwrap());
}
