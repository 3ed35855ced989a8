mod serializer;

mod document;
pub use document::TerraformDocument;

mod route53;
pub use route53::RECORD_RESOURCE;
pub use route53::Route53Record;
pub use route53::Route53Zone;
pub use route53::ZONE_DATA_SOURCE;
pub use route53::ZoneRef;
pub use route53::sanitize_identifier;
