//! Catalog provider adapters.
//!
//! Each external catalog speaks its own field layout; the adapters normalise
//! both into the canonical [`Product`](crate::domain::catalog::Product) shape.
//! Provider failures (transport, non-2xx, payload mismatch) are logged and
//! degrade to empty results, never to errors in the aggregation layer.

mod brazil;
mod errors;
mod europe;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::catalog::Product;

pub use brazil::BrazilianProvider;
pub use errors::ProviderPayloadError;
pub use europe::EuropeanProvider;

/// Default base URL of the mock provider host.
pub const DEFAULT_BASE_URL: &str = "https://616d6bdb6dacbb001794ca17.mockapi.io/devnology";

/// Configuration for connecting to the external provider host.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL the provider paths are appended to.
    pub base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// A single external catalog.
///
/// The infallible signatures are the contract: a failing provider yields an
/// empty search result or no product, it never raises into the caller.
#[automock]
#[async_trait]
pub trait Provider: Send + Sync {
    /// Search the catalog. Failures degrade to an empty list.
    async fn search(&self, term: &str, page: u32, limit: u32) -> Vec<Product>;

    /// Fetch a single record by id. Failures degrade to `None`.
    async fn fetch_one(&self, id: &str) -> Option<Product>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::net::SocketAddr;

    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    /// Spawn a one-shot HTTP server answering every request with the given
    /// status line and body. Returns the bound address.
    pub(crate) async fn spawn_stub(status_line: &'static str, body: &'static str) -> SocketAddr {
        #[expect(clippy::unwrap_used, reason = "test stub setup")]
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();

        #[expect(clippy::unwrap_used, reason = "test stub setup")]
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _peer)) = listener.accept().await {
                let mut buf = [0_u8; 4096];
                let _bytes_read = socket.read(&mut buf).await;

                let response = format!(
                    "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len(),
                );

                let _write_result = socket.write_all(response.as_bytes()).await;
            }
        });

        addr
    }
}
