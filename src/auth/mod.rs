mod edgegrid;
mod edgerc;

pub use edgegrid::EdgeGridSigner;
pub use edgegrid::RequestSigner;
pub use edgerc::Credentials;
