//! Seat agent server.
//!
//! Listens on `BIND_ADDR`, plays tables reached through `DEALER_URL`, and
//! loads its policy from `S3_BUCKET`/`S3_KEY` (or `POLICY_DIR`) on first use.
use clap::Parser;
use robojack::config::Config;
use robojack::hosting::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    robojack::log();
    robojack::kys();
    let config = Config::parse();
    Server::run(config).await?;
    Ok(())
}
