use crate::error::Result;
use crate::record::RawZone;

use async_trait::async_trait;

#[async_trait]
pub trait ZoneFetcher {
    async fn fetch_zone(&self, zone: &str) -> Result<RawZone>;
}
