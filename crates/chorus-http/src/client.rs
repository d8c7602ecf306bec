use async_trait::async_trait;
use chorus_core::{ApiConfig, EntityKey, Error, Record, Result, Transport};
use chorus_models::{MalformedPayload, RoleResponse, WireRecord};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};

use crate::route::Route;

/// HTTP transport for entity fetches.
///
/// One GET per [`fetch`](Transport::fetch). Failed requests are reported,
/// never retried; timeouts surface as [`Error::Transport`].
#[derive(Debug, Clone)]
pub struct RestTransport {
    http: Client,
    base_url: String,
}

impl RestTransport {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bot {token}"))
                .map_err(|e| Error::transport(format!("invalid token: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|e| Error::transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, route: &Route) -> String {
        format!("{}{}", self.base_url, route.path())
    }
}

#[async_trait]
impl Transport for RestTransport {
    async fn fetch(&self, key: &EntityKey) -> Result<Record> {
        let Some(route) = Route::for_key(key) else {
            tracing::debug!(%key, "no REST route for gateway-only entity");
            return Err(Error::NotFound { key: *key });
        };

        let url = self.url(&route);
        tracing::debug!(%key, %url, "GET");
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::transport(format!("request to {url} failed: {e}")))?;

        if let Some(err) = status_error(resp.status(), key) {
            return Err(err);
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| Error::transport(format!("reading {url} failed: {e}")))?;

        match route {
            Route::Object(_) => Ok(Record::decode_slice(key.kind(), &body)?),
            Route::RoleList { role_id, .. } => {
                let roles: Vec<RoleResponse> = serde_json::from_slice(&body)
                    .map_err(|e| MalformedPayload::new(RoleResponse::KIND, e))?;
                roles
                    .into_iter()
                    .find(|role| role.id == role_id)
                    .map(Record::Role)
                    .ok_or(Error::NotFound { key: *key })
            }
        }
    }
}

/// Map a non-success status onto the error taxonomy.
fn status_error(status: StatusCode, key: &EntityKey) -> Option<Error> {
    if status.is_success() {
        return None;
    }
    Some(match status {
        StatusCode::NOT_FOUND => Error::NotFound { key: *key },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Unauthorized { key: *key },
        other => Error::transport_status(other.as_u16(), format!("fetching {key} returned {other}")),
    })
}
