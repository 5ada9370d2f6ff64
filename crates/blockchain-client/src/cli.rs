use clap::Parser;

/// blockchain-client: REST gateway for Polygon chain-head and block queries.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Polygon JSON-RPC endpoint URL.
    #[arg(
        long,
        default_value = "https://polygon-rpc.com/",
        env = "BLOCKCHAIN_CLIENT_RPC_URL"
    )]
    pub rpc_url: String,

    /// Timeout in seconds for each upstream RPC call (1 to 3600). Also the
    /// deadline budget of every incoming HTTP request.
    #[arg(
        long,
        default_value = "10",
        env = "BLOCKCHAIN_CLIENT_RPC_TIMEOUT_SECS",
        value_parser = clap::value_parser!(u64).range(1..=3600)
    )]
    pub rpc_timeout_secs: u64,

    /// Address to bind the web server to.
    #[arg(long, default_value = "0.0.0.0", env = "BLOCKCHAIN_CLIENT_BIND")]
    pub bind: String,

    /// Port to listen on.
    #[arg(long, default_value = "8080", env = "BLOCKCHAIN_CLIENT_PORT")]
    pub port: u16,
}
