use crate::errors::{ConfigError, ServiceError};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde_json::Value;
use std::{env, time::Duration};
use tokio::sync::OnceCell;
use tracing::warn;

const DEFAULT_NAMESPACE: &str = "wenyaxie023_github_io";
const DEFAULT_KEY: &str = "about_like";
const COUNTERAPI_BASE: &str = "https://api.counterapi.dev/v1";
const COUNTAPI_BASE: &str = "https://api.countapi.xyz";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub namespace: String,
    pub key: String,
    pub counterapi_base: Url,
    pub countapi_base: Url,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            namespace: env::var("LIKE_NAMESPACE").unwrap_or_else(|_| DEFAULT_NAMESPACE.to_string()),
            key: env::var("LIKE_KEY").unwrap_or_else(|_| DEFAULT_KEY.to_string()),
            counterapi_base: base_url("COUNTERAPI_BASE_URL", COUNTERAPI_BASE)?,
            countapi_base: base_url("COUNTAPI_BASE_URL", COUNTAPI_BASE)?,
        })
    }
}

fn base_url(name: &'static str, default: &str) -> Result<Url, ConfigError> {
    let value = env::var(name).unwrap_or_else(|_| default.to_string());
    Url::parse(&value).map_err(|err| ConfigError {
        name,
        value: value.clone(),
        reason: err.to_string(),
    })
}

pub fn http_client() -> Result<Client, reqwest::Error> {
    Client::builder().timeout(REQUEST_TIMEOUT).build()
}

#[async_trait]
pub trait CounterService: Send + Sync {
    fn name(&self) -> &'static str;
    async fn get_count(&self) -> Result<i64, ServiceError>;
    async fn increment(&self) -> Result<i64, ServiceError>;
}

pub fn default_services(
    client: Client,
    config: &ServiceConfig,
) -> Result<Vec<Box<dyn CounterService>>, ConfigError> {
    Ok(vec![
        Box::new(CounterApi::new(client.clone(), config)?),
        Box::new(CountApi::new(client, config)?),
    ])
}

pub struct CounterApi {
    client: Client,
    get_url: Url,
    up_url: Url,
}

impl CounterApi {
    pub fn new(client: Client, config: &ServiceConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            get_url: join_segments(&config.counterapi_base, &[&config.namespace, &config.key])?,
            up_url: join_segments(
                &config.counterapi_base,
                &[&config.namespace, &config.key, "up"],
            )?,
            client,
        })
    }
}

#[async_trait]
impl CounterService for CounterApi {
    fn name(&self) -> &'static str {
        "counterapi"
    }

    async fn get_count(&self) -> Result<i64, ServiceError> {
        fetch_value(self.client.get(self.get_url.clone()), self.name(), "get").await
    }

    async fn increment(&self) -> Result<i64, ServiceError> {
        fetch_value(self.client.post(self.up_url.clone()), self.name(), "increment").await
    }
}

pub struct CountApi {
    client: Client,
    create_url: Url,
    get_url: Url,
    hit_url: Url,
    init: OnceCell<()>,
}

impl CountApi {
    pub fn new(client: Client, config: &ServiceConfig) -> Result<Self, ConfigError> {
        let mut create_url = join_segments(&config.countapi_base, &["create"])?;
        create_url
            .query_pairs_mut()
            .append_pair("namespace", &config.namespace)
            .append_pair("key", &config.key)
            .append_pair("value", "0");

        Ok(Self {
            create_url,
            get_url: join_segments(
                &config.countapi_base,
                &["get", &config.namespace, &config.key],
            )?,
            hit_url: join_segments(
                &config.countapi_base,
                &["hit", &config.namespace, &config.key],
            )?,
            client,
            init: OnceCell::new(),
        })
    }

    // The counter usually already exists, so a failed create is only logged.
    // Attempted at most once per process, whatever the outcome.
    async fn ensure_initialized(&self) {
        self.init
            .get_or_init(|| async {
                if let Err(err) = self.client.get(self.create_url.clone()).send().await {
                    warn!("countapi initialize failed (likely already exists): {err}");
                }
            })
            .await;
    }
}

#[async_trait]
impl CounterService for CountApi {
    fn name(&self) -> &'static str {
        "countapi"
    }

    async fn get_count(&self) -> Result<i64, ServiceError> {
        self.ensure_initialized().await;
        fetch_value(self.client.get(self.get_url.clone()), self.name(), "get").await
    }

    async fn increment(&self) -> Result<i64, ServiceError> {
        self.ensure_initialized().await;
        fetch_value(self.client.get(self.hit_url.clone()), self.name(), "increment").await
    }
}

fn join_segments(base: &Url, segments: &[&str]) -> Result<Url, ConfigError> {
    let mut url = base.clone();
    {
        let mut path = url.path_segments_mut().map_err(|_| ConfigError {
            name: "base url",
            value: base.to_string(),
            reason: "cannot be a base".to_string(),
        })?;
        path.pop_if_empty();
        path.extend(segments);
    }
    Ok(url)
}

async fn fetch_value(
    request: RequestBuilder,
    service: &'static str,
    action: &'static str,
) -> Result<i64, ServiceError> {
    let response = request.send().await?;
    if !response.status().is_success() {
        return Err(ServiceError::Status {
            service,
            action,
            status: response.status().as_u16(),
        });
    }

    let data: Value = response.json().await?;
    extract_value(&data).ok_or(ServiceError::UnexpectedPayload { service, action })
}

// Payloads differ between services; scan the known field names for anything
// numeric, coercing strings to integers.
pub fn extract_value(data: &Value) -> Option<i64> {
    if let Some(value) = number_value(data) {
        return Some(value);
    }

    let object = data.as_object()?;
    for candidate in ["value", "count", "data"] {
        let Some(raw) = object.get(candidate) else {
            continue;
        };
        if let Some(value) = number_value(raw) {
            return Some(value);
        }
        if let Some(text) = raw.as_str() {
            if let Ok(parsed) = text.trim().parse::<i64>() {
                return Some(parsed);
            }
        }
    }

    None
}

fn number_value(value: &Value) -> Option<i64> {
    if let Some(int) = value.as_i64() {
        return Some(int);
    }
    value.as_f64().map(|float| float as i64)
}
