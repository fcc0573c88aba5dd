use std::sync::Arc;

use item_registry::{http, InMemoryRegistry};

/// A running server and a client pointed at it.
pub struct TestApp {
    pub base: String,
    pub client: reqwest::Client,
    pub registry: Arc<InMemoryRegistry>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// Bind to port 0 and serve a fresh, empty registry.
pub async fn start_server() -> TestApp {
    let registry = Arc::new(InMemoryRegistry::new());
    let app = http::router(registry.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestApp {
        base: format!("http://{addr}"),
        client: reqwest::Client::new(),
        registry,
    }
}
