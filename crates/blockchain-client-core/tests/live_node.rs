use std::env;
use std::time::Duration;

use blockchain_client_core::rpc::{BlockchainClient, Deadline, HttpRpcClient, RpcConfig};

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires network access to a Polygon JSON-RPC endpoint; set BLOCKCHAIN_CLIENT_TEST_RPC_URL"]
async fn live_node_serves_chain_head_and_block() {
    let rpc_url = env::var("BLOCKCHAIN_CLIENT_TEST_RPC_URL")
        .expect("BLOCKCHAIN_CLIENT_TEST_RPC_URL must be set");
    let rpc = HttpRpcClient::new(RpcConfig::new(&rpc_url)).expect("rpc client must construct");

    eprintln!("[itest] fetching chain head from {rpc_url}");
    let head = rpc
        .latest_block_number(Deadline::after(Duration::from_secs(10)))
        .await
        .expect("eth_blockNumber must succeed");
    assert!(head.starts_with("0x"), "chain head must be a hex quantity");

    eprintln!("[itest] fetching block {head}");
    let block = rpc
        .block_by_number(&head, Deadline::after(Duration::from_secs(10)))
        .await
        .expect("eth_getBlockByNumber must succeed");
    let block: serde_json::Value =
        serde_json::from_str(block.get()).expect("block payload must be valid JSON");
    assert_eq!(block["number"], serde_json::Value::String(head));
    assert!(
        block["transactions"].is_array(),
        "block must list its transactions"
    );
}
