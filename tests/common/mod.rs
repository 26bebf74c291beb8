//! Shared utilities for integration tests.

use lista_super::config::{ErrorStatusPolicy, ServiceConfig};
use lista_super::store::{self, Dialect, Gateway};
use lista_super::{HttpServer, Shutdown};
use tokio::net::TcpListener;

/// A running service backed by its own in-memory SQLite database.
pub struct TestServer {
    pub base_url: String,
    pub gateway: Gateway,
    shutdown: Shutdown,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

#[allow(dead_code)]
pub fn test_config(policy: ErrorStatusPolicy) -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.database.url = "sqlite::memory:".into();
    config.database.max_connections = 1;
    config.database.bootstrap_schema = true;
    config.http.error_status = policy;
    config
}

/// Start the service on an ephemeral port.
pub async fn spawn_server(policy: ErrorStatusPolicy) -> TestServer {
    spawn_with_config(test_config(policy)).await
}

#[allow(dead_code)]
pub async fn spawn_with_config(config: ServiceConfig) -> TestServer {
    let gateway = Gateway::connect(&config.database).await.unwrap();
    store::bootstrap(&gateway, Dialect::Sqlite).await.unwrap();

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, gateway.clone());
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    TestServer {
        base_url: format!("http://{}", addr),
        gateway,
        shutdown,
    }
}

/// Client that never reuses connections or goes through a proxy.
#[allow(dead_code)]
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
