use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};

use fastdns2tf::auth::Credentials;
use fastdns2tf::error::{Error, Result};

const DEFAULT_SECTION: &str = "default";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

////////////////////////////////////////////////////////////
// Command line
////////////////////////////////////////////////////////////
#[derive(Debug, Parser)]
#[command(
    name = "fastdns2tf",
    version,
    about = "Fetch FastDNS zone and convert to terraform JSON."
)]
pub struct Args {
    /// The zone to fetch from FastDNS
    pub zone: String,

    /// Credentials file [default: ~/.edgerc]
    #[arg(long, env = "AKAMAI_EDGERC")]
    pub edgerc: Option<PathBuf>,

    /// Profile section inside the credentials file
    #[arg(long, env = "AKAMAI_EDGERC_SECTION", default_value = DEFAULT_SECTION)]
    pub section: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

////////////////////////////////////////////////////////////
// Resolved configuration
////////////////////////////////////////////////////////////
#[derive(Debug, Clone, PartialEq)]
pub struct Cfg {
    pub zone: String,
    pub edgerc: PathBuf,
    pub section: String,
    pub timeout: Duration,
}

impl Cfg {
    pub fn from_args(args: Args) -> Result<Self> {
        if args.zone.is_empty() {
            return Err(Error::Config("zone must not be empty".to_string()));
        }
        if args.timeout == 0 {
            return Err(Error::Config("timeout must be at least one second".to_string()));
        }

        let edgerc = match args.edgerc {
            Some(path) => path,
            None => default_edgerc()?,
        };

        Ok(Self {
            zone: args.zone,
            edgerc,
            section: args.section,
            timeout: Duration::from_secs(args.timeout),
        })
    }

    pub fn load_credentials(&self) -> Result<Credentials> {
        Credentials::from_file(&self.edgerc, &self.section)
    }
}

fn default_edgerc() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".edgerc"))
        .ok_or_else(|| Error::Config("no home directory, pass --edgerc".to_string()))
}

////////////////////////////////////////////////////////////
// Unit test
////////////////////////////////////////////////////////////
#[cfg(test)]
#[path = "config_test.rs"]
mod test;
