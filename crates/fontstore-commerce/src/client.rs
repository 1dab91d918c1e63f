//! # Commerce Client
//!
//! The [`CommerceApi`] trait and its two backends.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      HttpCommerce Request                               │
//! │                                                                         │
//! │  list_products(&query)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET {base}/wp-json/wc/v3/products?page=..&search=..                   │
//! │      Authorization: Basic base64(key:secret)                           │
//! │       │                                                                 │
//! │       ├── 2xx ──────► decode JSON ──► Vec<RemoteProduct>               │
//! │       ├── 404 on a product ─────────► CommerceError::NotFound          │
//! │       └── other non-2xx ────────────► CommerceError::Api{status,body}  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::config::{CommerceConfig, ConfigError};
use crate::error::{CommerceError, CommerceResult};
use crate::mock::MockCommerce;
use crate::models::{Category, NewOrder, RemoteOrder, RemoteProduct, Tag};
use crate::query::{OrderQuery, ProductQuery};

/// Upper bound on error bodies kept in [`CommerceError::Api`].
const MAX_ERROR_BODY: usize = 2048;

// =============================================================================
// Trait
// =============================================================================

/// Operations the storefront needs from the shop backend.
#[async_trait]
pub trait CommerceApi: Send + Sync {
    /// Lists catalog products matching `query`.
    async fn list_products(&self, query: &ProductQuery) -> CommerceResult<Vec<RemoteProduct>>;

    /// Fetches one product; `NotFound` if it doesn't exist.
    async fn get_product(&self, id: u64) -> CommerceResult<RemoteProduct>;

    /// Lists product categories.
    async fn list_categories(&self) -> CommerceResult<Vec<Category>>;

    /// Lists product tags.
    async fn list_tags(&self) -> CommerceResult<Vec<Tag>>;

    /// `list_products` with `search` set to `term`.
    async fn search_products(
        &self,
        term: &str,
        query: &ProductQuery,
    ) -> CommerceResult<Vec<RemoteProduct>> {
        let query = query.clone().search(term);
        self.list_products(&query).await
    }

    /// Submits a new order.
    async fn create_order(&self, order: &NewOrder) -> CommerceResult<RemoteOrder>;

    /// Lists orders, newest first.
    async fn list_orders(&self, query: &OrderQuery) -> CommerceResult<Vec<RemoteOrder>>;
}

// =============================================================================
// HTTP Backend
// =============================================================================

/// Live backend over HTTPS with basic auth.
#[derive(Debug, Clone)]
pub struct HttpCommerce {
    config: CommerceConfig,
    http: Client,
}

impl HttpCommerce {
    /// Builds the client. Fails if credentials are missing.
    pub fn new(config: CommerceConfig) -> CommerceResult<Self> {
        let live = CommerceConfig {
            use_mock_data: false,
            ..config
        };
        live.validate()?;

        let http = Client::builder()
            .timeout(live.request_timeout)
            .build()
            .map_err(|e| CommerceError::Http(e.to_string()))?;

        info!(base_url = %live.base_url, "Commerce API client initialized");

        Ok(HttpCommerce { config: live, http })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn authorized(&self, request: RequestBuilder) -> CommerceResult<RequestBuilder> {
        let key = self
            .config
            .consumer_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingRequired("FONTSTORE_CONSUMER_KEY".to_string()))?;
        Ok(request.basic_auth(key, self.config.consumer_secret.as_deref()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
    ) -> CommerceResult<T> {
        let url = self.config.endpoint_url(endpoint);
        debug!(url = %url, params = params.len(), "GET");

        let request = self.authorized(self.http.get(&url).query(params))?;
        let response = request.send().await?;
        read_json(response).await
    }

    async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> CommerceResult<T>
    where
        B: serde::Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint_url(endpoint);
        debug!(url = %url, "POST");

        let request = self.authorized(self.http.post(&url).json(body))?;
        let response = request.send().await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> CommerceResult<T> {
    let status = response.status();

    if !status.is_success() {
        let mut body = response.text().await.unwrap_or_default();
        if body.len() > MAX_ERROR_BODY {
            let mut cut = MAX_ERROR_BODY;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
        }
        warn!(status = status.as_u16(), body = %body, "Commerce API error");
        return Err(CommerceError::Api {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl CommerceApi for HttpCommerce {
    async fn list_products(&self, query: &ProductQuery) -> CommerceResult<Vec<RemoteProduct>> {
        self.get_json("products", &query.to_query_pairs()).await
    }

    async fn get_product(&self, id: u64) -> CommerceResult<RemoteProduct> {
        match self.get_json(&format!("products/{}", id), &[]).await {
            Err(CommerceError::Api { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(CommerceError::not_found("Product", id))
            }
            other => other,
        }
    }

    async fn list_categories(&self) -> CommerceResult<Vec<Category>> {
        self.get_json("products/categories", &[]).await
    }

    async fn list_tags(&self) -> CommerceResult<Vec<Tag>> {
        self.get_json("products/tags", &[]).await
    }

    async fn create_order(&self, order: &NewOrder) -> CommerceResult<RemoteOrder> {
        let created: RemoteOrder = self.post_json("orders", order).await?;
        info!(order_id = created.id, status = %created.status, "Order created");
        Ok(created)
    }

    async fn list_orders(&self, query: &OrderQuery) -> CommerceResult<Vec<RemoteOrder>> {
        self.get_json("orders", &query.to_query_pairs()).await
    }
}

// =============================================================================
// Backend Selection
// =============================================================================

/// The backend chosen by configuration.
#[derive(Debug)]
pub enum Commerce {
    Http(HttpCommerce),
    Mock(MockCommerce),
}

impl Commerce {
    /// Picks the mock backend when `use_mock_data` is set, HTTP otherwise.
    pub fn from_config(config: &CommerceConfig) -> CommerceResult<Self> {
        if config.use_mock_data {
            info!("Using fixture commerce backend");
            Ok(Commerce::Mock(MockCommerce::new()))
        } else {
            Ok(Commerce::Http(HttpCommerce::new(config.clone())?))
        }
    }

    fn backend(&self) -> &dyn CommerceApi {
        match self {
            Commerce::Http(http) => http,
            Commerce::Mock(mock) => mock,
        }
    }
}

#[async_trait]
impl CommerceApi for Commerce {
    async fn list_products(&self, query: &ProductQuery) -> CommerceResult<Vec<RemoteProduct>> {
        self.backend().list_products(query).await
    }

    async fn get_product(&self, id: u64) -> CommerceResult<RemoteProduct> {
        self.backend().get_product(id).await
    }

    async fn list_categories(&self) -> CommerceResult<Vec<Category>> {
        self.backend().list_categories().await
    }

    async fn list_tags(&self) -> CommerceResult<Vec<Tag>> {
        self.backend().list_tags().await
    }

    async fn create_order(&self, order: &NewOrder) -> CommerceResult<RemoteOrder> {
        self.backend().create_order(order).await
    }

    async fn list_orders(&self, query: &OrderQuery) -> CommerceResult<Vec<RemoteOrder>> {
        self.backend().list_orders(query).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// One-shot HTTP server: answers a single request with `status` and
    /// `body`, returning the raw request it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 16 * 1024];
            let mut request = Vec::new();
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{}/", addr), handle)
    }

    fn client(base_url: &str) -> HttpCommerce {
        HttpCommerce::new(CommerceConfig::live(base_url, "ck_test", "cs_test")).unwrap()
    }

    #[test]
    fn test_http_client_requires_credentials() {
        let mut config = CommerceConfig::live("https://shop.example.com", "ck", "cs");
        config.consumer_secret = None;
        assert!(matches!(
            HttpCommerce::new(config),
            Err(CommerceError::Config(ConfigError::MissingRequired(_)))
        ));
    }

    #[test]
    fn test_backend_selection() {
        let mock = Commerce::from_config(&CommerceConfig::mock()).unwrap();
        assert!(matches!(mock, Commerce::Mock(_)));

        let live = Commerce::from_config(&CommerceConfig::live("https://shop.example.com/", "ck", "cs"))
            .unwrap();
        match live {
            Commerce::Http(http) => assert_eq!(http.base_url(), "https://shop.example.com"),
            Commerce::Mock(_) => panic!("expected HTTP backend"),
        }
    }

    #[tokio::test]
    async fn test_list_products_request_shape() {
        let (base, server) = serve_once("200 OK", r#"[{"id": 62, "name": "Montserrat Pro", "price": "29.00"}]"#).await;

        let products = client(&base)
            .list_products(&ProductQuery::new().search("sans").per_page(5))
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 62);
        assert!(request.starts_with("GET /wp-json/wc/v3/products?per_page=5&search=sans HTTP/1.1"));
        // base64("ck_test:cs_test")
        assert!(request.contains("Y2tfdGVzdDpjc190ZXN0"));
    }

    #[tokio::test]
    async fn test_get_product_404_is_not_found() {
        let (base, server) = serve_once("404 Not Found", r#"{"code":"woocommerce_rest_product_invalid_id"}"#).await;

        let err = client(&base).get_product(999).await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, CommerceError::NotFound { ref id, .. } if id == "999"));
    }

    #[tokio::test]
    async fn test_server_error_keeps_status_and_body() {
        let (base, server) = serve_once("500 Internal Server Error", r#"{"message":"boom"}"#).await;

        let err = client(&base).list_categories().await.unwrap_err();
        server.await.unwrap();

        match err {
            CommerceError::Api { status, body } => {
                assert_eq!(status, 500);
                assert!(body.contains("boom"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let (base, server) = serve_once("200 OK", r#"{"not": "a list"}"#).await;

        let err = client(&base).list_tags().await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, CommerceError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_search_products_sets_search() {
        let commerce = Commerce::Mock(MockCommerce::new());
        let found = commerce
            .search_products("script", &ProductQuery::new())
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Elegant Script");
    }
}
