mod cli;
mod server;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use eyre::WrapErr;

use blockchain_client_core::rpc::{BlockchainClient, Deadline, HttpRpcClient, RpcConfig};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let request_timeout = Duration::from_secs(args.rpc_timeout_secs);
    let rpc = HttpRpcClient::new(RpcConfig::new(&args.rpc_url).with_timeout(request_timeout))
        .wrap_err("configure Polygon RPC client")?;

    // Best-effort head check; the gateway still starts when the node is down and
    // reports failures per request.
    match rpc
        .latest_block_number(Deadline::after(request_timeout))
        .await
    {
        Ok(head) => tracing::info!(rpc_url = %rpc.url(), chain_head = %head, "connected to RPC node"),
        Err(err) => tracing::warn!(
            "{}",
            format_rpc_connect_error(rpc.url(), &err.to_string())
        ),
    }

    let state = server::AppState {
        client: Arc::new(rpc),
        request_timeout,
    };

    let bind_addr = format!("{}:{}", args.bind, args.port);
    let router = server::build_router(state);

    if args.bind == "0.0.0.0" {
        tracing::warn!("server is bound to 0.0.0.0; it is accessible from the network");
    }

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .context("bind TCP listener")?;

    tracing::info!("listening on {bind_addr}");
    axum::serve(listener, router)
        .await
        .context("run HTTP server")?;

    Ok(())
}

fn format_rpc_connect_error(rpc_url: &str, source_error: &str) -> String {
    let mut lines = vec![
        format!("could not reach RPC endpoint `{rpc_url}`"),
        format!("RPC error: {source_error}"),
    ];

    if source_error.contains("dns error") {
        lines.push(
            "hint: hostname resolution failed; verify the endpoint hostname and your DNS/network"
                .into(),
        );
    } else if source_error.contains("certificate") || source_error.contains("tls") {
        lines.push(
            "hint: TLS handshake failed; verify certificate trust and that the endpoint uses HTTPS"
                .into(),
        );
    } else if source_error.contains("status 401") || source_error.contains("status 403") {
        lines.push("hint: the endpoint rejected the request; check whether it needs an API key in the URL".into());
    } else if source_error.contains("status 429") {
        lines.push("hint: the endpoint is rate limiting this client".into());
    } else if source_error.contains("deadline exceeded") {
        lines.push(
            "hint: the node did not answer in time; consider raising --rpc-timeout-secs".into(),
        );
    }

    lines.join("\n")
}
