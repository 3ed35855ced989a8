use crate::error::Result;
use crate::fetcher::ZoneFetcher;
use crate::provider::{Route53Record, Route53Zone, TerraformDocument};
use crate::record::{RawZone, normalize};

/// Turns a fetched FastDNS zone into a Route 53 Terraform document.
pub fn convert(raw: &RawZone) -> Result<TerraformDocument> {
    let mut doc = TerraformDocument::new(Route53Zone::new(&raw.name));

    for group in normalize(raw)? {
        let record = Route53Record::from_group(doc.zone(), &group);
        log::debug!(
            "{} {} -> {} value(s), ttl {}",
            record.record_type,
            record.name,
            record.records.len(),
            record.ttl
        );
        doc.add(record);
    }

    log::info!("zone {}: {} record set(s)", raw.name, doc.len());
    Ok(doc)
}

/// Fetches `zone` and converts it. Nothing is built if the fetch fails.
pub async fn fetch_and_convert<F>(fetcher: &F, zone: &str) -> Result<TerraformDocument>
where
    F: ZoneFetcher + Sync + ?Sized,
{
    let raw = fetcher.fetch_zone(zone).await?;
    convert(&raw)
}
