mod fastdns;
mod types;

pub use fastdns::FastDnsFetcher;
pub use types::ZoneFetcher;
