//! Agent configuration from command line flags and the environment.
use crate::policy::Credentials;
use crate::policy::Disk;
use crate::policy::Library;
use crate::policy::S3;
use crate::policy::Store;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Policy-driven blackjack seat agent")]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind: String,
    /// Base WebSocket URL of the table engine; tables are reached at `<url>/<table_id>`.
    #[arg(long, env = "DEALER_URL")]
    pub dealer: String,
    #[arg(long, env = "S3_BUCKET")]
    pub bucket: String,
    #[arg(long, env = "S3_KEY")]
    pub key: String,
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,
    /// Custom S3-compatible endpoint, otherwise the regional AWS endpoint.
    #[arg(long, env = "S3_ENDPOINT")]
    pub endpoint: Option<String>,
    /// Read the artifact from `<dir>/<bucket>/<key>` instead of S3.
    #[arg(long, env = "POLICY_DIR")]
    pub policy_dir: Option<PathBuf>,
    #[arg(long, env = "WORKERS", default_value_t = 4)]
    pub workers: usize,
}

impl Config {
    pub fn store(&self) -> Box<dyn Store> {
        match self.policy_dir {
            Some(ref dir) => Box::new(Disk::new(dir)),
            None => Box::new(S3::new(&self.region, self.endpoint.clone())),
        }
    }
    pub fn library(&self) -> Library {
        Library::new(self.store(), &self.bucket, &self.key, Credentials::from_env())
    }
}
