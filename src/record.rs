mod group;
mod zone;

pub use group::RecordGroup;
pub use group::normalize;
pub use zone::RawRecord;
pub use zone::RawZone;

pub type ZoneName = String;

/// Keys of the zone object that describe the zone itself, not record sets.
pub const IGNORED_METADATA: &[&str] = &["id", "time", "version", "name", "instance", "publisher"];

/// Zone infrastructure records with no Route 53 counterpart.
pub const IGNORED_RRTYPES: &[&str] = &["SOA", "NSEC3", "DS", "DNSKEY", "NSEC3PARAM"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordType {
    A,
    AAAA,
    NS,
    CNAME,
    TXT,
    LOC,
    MX,
    HINFO,
    PTR,
    SRV,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::NS => "NS",
            RecordType::CNAME => "CNAME",
            RecordType::TXT => "TXT",
            RecordType::LOC => "LOC",
            RecordType::MX => "MX",
            RecordType::HINFO => "HINFO",
            RecordType::PTR => "PTR",
            RecordType::SRV => "SRV",
        }
    }

    /// Looks up an uppercase type label; `None` means the type is not handled.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "A" => Some(RecordType::A),
            "AAAA" => Some(RecordType::AAAA),
            "NS" => Some(RecordType::NS),
            "CNAME" => Some(RecordType::CNAME),
            "TXT" => Some(RecordType::TXT),
            "LOC" => Some(RecordType::LOC),
            "MX" => Some(RecordType::MX),
            "HINFO" => Some(RecordType::HINFO),
            "PTR" => Some(RecordType::PTR),
            "SRV" => Some(RecordType::SRV),
            _ => None,
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod unit_test;
