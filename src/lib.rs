pub mod error;
pub use error::*;

pub mod auth;
pub mod convert;
pub mod fetcher;
pub mod provider;
pub mod record;

mod wrapper;
