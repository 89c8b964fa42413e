use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// CLI arguments for atlas-server
#[derive(Debug, Parser)]
#[command(
    name = "atlas-server",
    version,
    about = "Serves the India Atlas site, its state data and boundary files"
)]
pub struct ServerArgs {
    /// Address to listen on
    #[arg(short = 'b', long = "bind", env = "ATLAS_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Directory holding stateData.json and india_states.geojson (either may be absent)
    #[arg(short = 'd', long = "data-dir", env = "ATLAS_DATA_DIR", default_value = "static/data")]
    pub data_dir: PathBuf,

    /// Site root: index.html plus the static/ and pkg/ trees
    #[arg(short = 's', long = "static-dir", env = "ATLAS_STATIC_DIR", default_value = ".")]
    pub static_dir: PathBuf,

    /// Optional JSON config file overriding the built-in site configuration
    #[arg(short = 'c', long = "config", env = "ATLAS_CONFIG")]
    pub config: Option<PathBuf>,
}
