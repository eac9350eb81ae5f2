use std::path::PathBuf;

use boundary_deploy::DEFAULT_MANIFEST_PATH;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use url::Url;

#[derive(Parser)]
#[command(name = "boundary-deploy")]
#[command(
    author,
    version,
    about = "Deploy the Boundary contract suite to the Somnia testnet"
)]
pub struct Cli {
    /// The verbosity level.
    #[arg(short, long, env = "BOUNDARY_VERBOSITY", default_value_t = LevelFilter::INFO)]
    pub verbosity: LevelFilter,

    /// Override the RPC endpoint.
    ///
    /// Defaults to the public Somnia testnet RPC; point this at a local fork
    /// for dry runs.
    #[arg(long, alias = "rpc", env = "BOUNDARY_RPC_URL")]
    pub rpc_url: Option<Url>,

    /// Hex-encoded private key of the deployer account.
    #[arg(long, env = "BOUNDARY_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: String,

    /// Directory containing the compiled contract artifacts.
    #[arg(long, env = "BOUNDARY_ARTIFACTS", default_value = "artifacts")]
    pub artifacts: PathBuf,

    /// Path the deployment manifest is written to.
    ///
    /// Overwritten wholesale on every successful run.
    #[arg(long, env = "BOUNDARY_MANIFEST", default_value = DEFAULT_MANIFEST_PATH)]
    pub manifest: PathBuf,
}
