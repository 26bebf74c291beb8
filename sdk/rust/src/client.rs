use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub nombre: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertMetadata {
    pub affected_rows: u64,
    pub insert_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub nombre: String,
    pub categoria_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
}

/// Error returned by [`CatalogClient`].
#[derive(Debug)]
pub enum ClientError {
    /// Transport or decoding failure.
    Http(reqwest::Error),
    /// The service answered with an `{"Error": ...}` envelope.
    Api { status: u16, message: String },
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Http(e) => write!(f, "HTTP error: {}", e),
            ClientError::Api { status, message } => write!(f, "API error {}: {}", status, message),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Http(e)
    }
}

impl ClientError {
    /// The service's error message, if the service produced one.
    pub fn message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } => Some(message),
            ClientError::Http(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    respuesta: T,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(rename = "Error")]
    error: String,
}

pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.send(self.request(Method::GET, "/categoria")).await
    }

    pub async fn get_category(&self, id: i64) -> Result<Vec<Category>, ClientError> {
        self.send(self.request(Method::GET, &format!("/categoria/{}", id))).await
    }

    pub async fn create_category(&self, nombre: &str) -> Result<InsertMetadata, ClientError> {
        let req = self
            .request(Method::POST, "/categoria")
            .json(&serde_json::json!({ "nombre": nombre }));
        self.send(req).await
    }

    /// Returns the number of affected rows.
    pub async fn rename_category(&self, id: i64, nombre: &str) -> Result<u64, ClientError> {
        let req = self
            .request(Method::PUT, &format!("/categoria/{}", id))
            .json(&serde_json::json!({ "nombre": nombre }));
        self.send(req).await
    }

    /// Returns the number of affected rows.
    pub async fn delete_category(&self, id: i64, nombre: &str) -> Result<u64, ClientError> {
        let req = self
            .request(Method::DELETE, &format!("/categoria/{}", id))
            .json(&serde_json::json!({ "nombre": nombre }));
        self.send(req).await
    }

    /// Returns the generated product id.
    pub async fn create_product(&self, product: &NewProduct) -> Result<i64, ClientError> {
        let req = self.request(Method::POST, "/producto").json(product);
        self.send(req).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, format!("{}{}", self.base_url, path))
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ClientError> {
        let resp = req.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let message = match resp.json::<ErrorEnvelope>().await {
                Ok(body) => body.error,
                Err(e) => e.to_string(),
            };
            return Err(ClientError::Api { status: status.as_u16(), message });
        }

        let body: Envelope<T> = resp.json().await?;
        Ok(body.respuesta)
    }
}
