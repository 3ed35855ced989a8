use std::io::Write;

use clap::Parser;
use env_logger::Env;

use fastdns2tf::auth::EdgeGridSigner;
use fastdns2tf::convert::fetch_and_convert;
use fastdns2tf::error::Result;
use fastdns2tf::fetcher::FastDnsFetcher;

mod config;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = config::Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_filter())).init();

    if let Err(e) = run(args, std::io::stdout()).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

// Nothing reaches `out` unless the whole zone converted.
async fn run<W: Write>(args: config::Args, out: W) -> Result<()> {
    let cfg = config::Cfg::from_args(args)?;

    let creds = cfg.load_credentials()?;
    let base_url = creds.base_url();
    log::debug!("using [{}] from {}, endpoint {}", cfg.section, cfg.edgerc.display(), base_url);

    let fetcher = FastDnsFetcher::new(base_url, EdgeGridSigner::new(creds), cfg.timeout)?;
    let doc = fetch_and_convert(&fetcher, &cfg.zone).await?;

    doc.write_to(out)
}

#[cfg(test)]
#[path = "main_test.rs"]
mod test;
