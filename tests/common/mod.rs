//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use alloy::consensus::TxEnvelope;
use alloy::primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use secrecy::SecretString;
use tokio::net::TcpListener;

use eth_sweeper::blockchain::{BlockchainError, BlockchainResult, ChainClient, Treasury};
use eth_sweeper::config::ServerConfig;
use eth_sweeper::{HttpServer, Shutdown, SweepService};

/// Anvil's first account.
pub const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const TEST_WALLET_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
pub const DEFAULT_DESTINATION: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

pub const ONE_ETH: u128 = 1_000_000_000_000_000_000;
pub const TWENTY_GWEI: u128 = 20_000_000_000;

/// In-memory chain that records what would have been broadcast.
pub struct FakeChainClient {
    pub balance: U256,
    pub gas_price: u128,
    pub chain_id: u64,
    pub nonce: u64,
    pub read_error: Option<String>,
    pub send_error: Option<String>,
    pub reads: AtomicUsize,
    pub sent: Mutex<Vec<TxEnvelope>>,
}

impl FakeChainClient {
    pub fn new(balance: u128, gas_price: u128) -> Self {
        Self {
            balance: U256::from(balance),
            gas_price,
            chain_id: 1,
            nonce: 0,
            read_error: None,
            send_error: None,
            reads: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_reads(reason: &str) -> Self {
        Self {
            read_error: Some(reason.to_string()),
            ..Self::new(0, 0)
        }
    }

    pub fn failing_sends(balance: u128, gas_price: u128, reason: &str) -> Self {
        Self {
            send_error: Some(reason.to_string()),
            ..Self::new(balance, gas_price)
        }
    }

    pub fn sent(&self) -> Vec<TxEnvelope> {
        self.sent.lock().unwrap().clone()
    }

    fn read<T>(&self, value: T) -> BlockchainResult<T> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        match &self.read_error {
            Some(reason) => Err(BlockchainError::Rpc(reason.clone())),
            None => Ok(value),
        }
    }
}

#[async_trait]
impl ChainClient for FakeChainClient {
    async fn get_balance(&self, _address: Address) -> BlockchainResult<U256> {
        self.read(self.balance)
    }

    async fn get_gas_price(&self) -> BlockchainResult<u128> {
        self.read(self.gas_price)
    }

    async fn get_chain_id(&self) -> BlockchainResult<u64> {
        self.read(self.chain_id)
    }

    async fn get_transaction_count(&self, _address: Address) -> BlockchainResult<u64> {
        self.read(self.nonce)
    }

    async fn send_transaction(&self, envelope: TxEnvelope) -> BlockchainResult<TxHash> {
        if let Some(reason) = &self.send_error {
            return Err(BlockchainError::Rpc(reason.clone()));
        }
        let hash = *envelope.tx_hash();
        self.sent.lock().unwrap().push(envelope);
        Ok(hash)
    }
}

pub fn configured_treasury() -> Treasury {
    Treasury::from_key(Some(SecretString::new(TEST_PRIVATE_KEY.to_string()))).unwrap()
}

/// A running server bound to an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn stop(self) {
        self.shutdown.trigger();
        self.handle.await.unwrap().unwrap();
    }
}

/// Start the full HTTP stack around `chain` and `treasury`.
pub async fn start_server(chain: Arc<FakeChainClient>, treasury: Treasury) -> TestServer {
    let sweeper = Arc::new(SweepService::new(
        chain,
        treasury,
        Some(DEFAULT_DESTINATION.parse().unwrap()),
        "https://etherscan.io",
    ));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(ServerConfig::default(), sweeper);
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    TestServer { addr, shutdown, handle }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
