use reqwest::Method;
use serde_json::{Map, Value};

use crate::client::{
    auth::ApiKeyAuth,
    config::ClientConfig,
    error::{CookMasterError, Result},
    transport::{HttpRequest, HttpResponse, HttpTransport, Transport, TransportError},
    types::*,
};

pub const MAX_PAGE_SIZE: i64 = 50;

/// Extra pieces of a request beyond method and endpoint.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub query: Vec<(String, String)>,
    pub json: Option<Value>,
}

impl RequestOptions {
    pub fn query<I, K, V>(query: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            query: query
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            json: None,
        }
    }

    pub fn json(body: Value) -> Self {
        Self {
            query: Vec::new(),
            json: Some(body),
        }
    }
}

pub struct CookMasterClient {
    config: ClientConfig,
    transport: Box<dyn Transport>,
}

impl CookMasterClient {
    /// Client with the default base URL, timeout and retry bound.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let auth = ApiKeyAuth::new(config.get_api_key());
        let transport = HttpTransport::new(&auth)?;
        log_created(&config, &auth);
        Ok(Self {
            config,
            transport: Box::new(transport),
        })
    }

    /// Client that sends through a caller-provided transport.
    pub fn with_transport(config: ClientConfig, transport: Box<dyn Transport>) -> Result<Self> {
        config.validate()?;
        log_created(&config, &ApiKeyAuth::new(config.get_api_key()));
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends a request, retrying only on transport failures.
    ///
    /// A response with status >= 400 fails straight away with the server's
    /// `message` (or `Error <status>`). A successful empty body yields `{}`;
    /// a successful body that is not JSON counts as a transport failure.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Value> {
        let url = build_url(&self.config.url_for(endpoint), &options.query);
        let max_retries = self.config.get_max_retries();

        for attempt in 1..=max_retries {
            tracing::debug!("{} {} (attempt {}/{})", method, url, attempt, max_retries);

            let request = HttpRequest {
                method: method.clone(),
                url: url.clone(),
                body: options.json.clone(),
                timeout: self.config.get_timeout(),
            };

            let outcome = match self.transport.send(request).await {
                Ok(response) => {
                    check_status(&response)?;
                    decode_body(&response.body)
                }
                Err(e) => Err(e),
            };

            match outcome {
                Ok(body) => return Ok(body),
                Err(e) if attempt < max_retries => {
                    tracing::warn!(
                        "Attempt {}/{} to {} failed ({}), retrying",
                        attempt,
                        max_retries,
                        url,
                        e
                    );
                }
                Err(e) => {
                    tracing::error!("Giving up on {} after {} attempts: {}", url, max_retries, e);
                    return Err(CookMasterError::api(format!("connection error: {}", e), None));
                }
            }
        }

        // max_retries >= 1 is enforced at construction.
        Ok(Value::Object(Map::new()))
    }

    // Recipe operations
    pub async fn list_recipes(&self, page: i64, limit: i64) -> Result<Value> {
        let page = page.max(1);
        let limit = limit.clamp(1, MAX_PAGE_SIZE);
        let query = vec![("page", page.to_string()), ("limit", limit.to_string())];

        self.request(Method::GET, "recetas/todas", RequestOptions::query(query))
            .await
    }

    pub async fn get_recipe(&self, id: i64) -> Result<Value> {
        let id = validate_id(id)?;
        self.request(Method::GET, &format!("recetas/{}", id), RequestOptions::default())
            .await
    }

    pub async fn delete_recipe(&self, id: i64) -> Result<Value> {
        let id = validate_id(id)?;
        self.request(Method::DELETE, &format!("recetas/{}", id), RequestOptions::default())
            .await
    }

    pub async fn create_recipe(&self, recipe: NewRecipe) -> Result<Value> {
        let payload = recipe.into_payload()?;
        self.request(Method::POST, "recetas", RequestOptions::json(payload))
            .await
    }

    /// Same as [`create_recipe`](Self::create_recipe), for callers holding a
    /// raw JSON object keyed by wire names.
    pub async fn create_recipe_from_map(&self, recipe: Map<String, Value>) -> Result<Value> {
        self.create_recipe(NewRecipe::from_map(recipe)?).await
    }

    pub async fn search_recipes(&self, filters: &SearchFilters) -> Result<Value> {
        let query = filters.to_query()?;
        self.request(Method::GET, "recetas/buscar", RequestOptions::query(query))
            .await
    }
}

fn validate_id(id: i64) -> Result<i64> {
    if id <= 0 {
        return Err(CookMasterError::invalid(format!(
            "id must be a positive integer (got {})",
            id
        )));
    }
    Ok(id)
}

fn log_created(config: &ClientConfig, auth: &ApiKeyAuth) {
    tracing::debug!(
        "Created CookMaster client for {} (key {}, timeout {:?}, {} attempts)",
        config.get_base_url(),
        auth.key_preview(),
        config.get_timeout(),
        config.get_max_retries()
    );
}

fn build_url(base: &str, query: &[(String, String)]) -> String {
    if query.is_empty() {
        return base.to_string();
    }
    let params: Vec<String> = query
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();
    format!("{}?{}", base, params.join("&"))
}

/// Turns a status >= 400 into an API error carrying the server's message.
fn check_status(response: &HttpResponse) -> Result<()> {
    let status = response.status;
    tracing::debug!("Response status: {}", status);

    if status < 400 {
        return Ok(());
    }

    let message = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|body| body.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| format!("Error {}", status));
    tracing::debug!("Request failed with status {}: {}", status, message);
    Err(CookMasterError::api(message, Some(status)))
}

/// Parses a success body. Only a zero-length body maps to `{}`; anything
/// else that is not JSON is reported as a transport failure.
fn decode_body(body: &str) -> std::result::Result<Value, TransportError> {
    if body.is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(body).map_err(|e| {
        tracing::debug!("Response body is not valid JSON: {}", e);
        TransportError(format!("invalid JSON in response: {}", e))
    })
}
