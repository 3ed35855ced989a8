use serde::{Serialize, Serializer};

use crate::record::RecordType;

use super::route53::{ZONE_DATA_SOURCE, ZoneRef};

impl Serialize for RecordType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for ZoneRef {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&format_args!(
            "${{data.{}.{}.zone_id}}",
            ZONE_DATA_SOURCE, self.zone_resource
        ))
    }
}
