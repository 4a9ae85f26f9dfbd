//! `reqwest` implementation of [`CollectionGateway`] against the admin REST
//! API described by the wire envelopes in [`crate::dto::envelope`].

use std::marker::PhantomData;
use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};

use crate::domain::types::EntityKey;
use crate::dto::envelope::{ItemEnvelope, ListEnvelope, StatusEnvelope};
use crate::gateway::{CollectionGateway, CollectionQuery, GatewayError, GatewayResult, Page, Resource};
use crate::session::SessionStore;

/// HTTP gateway for one resource. Cheap to construct per screen; the
/// underlying [`Client`] is shared.
pub struct HttpGateway<R: Resource> {
    http: Client,
    base_url: Url,
    session: Arc<SessionStore>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> HttpGateway<R> {
    /// Builds a gateway rooted at `base_url`, e.g. `https://api.example.com/api/v1`.
    pub fn new(http: Client, base_url: &str, session: Arc<SessionStore>) -> GatewayResult<Self> {
        // A trailing slash keeps `Url::join` from eating the last path segment.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url =
            Url::parse(&normalized).map_err(|e| GatewayError::InvalidBaseUrl(e.to_string()))?;
        Ok(Self {
            http,
            base_url,
            session,
            _resource: PhantomData,
        })
    }

    fn collection_url(&self) -> GatewayResult<Url> {
        self.base_url
            .join(R::PATH)
            .map_err(|e| GatewayError::InvalidBaseUrl(e.to_string()))
    }

    fn item_url(&self, id: &EntityKey) -> GatewayResult<Url> {
        self.base_url
            .join(&format!("{}/{}", R::PATH, id))
            .map_err(|e| GatewayError::InvalidBaseUrl(e.to_string()))
    }

    /// Attaches the persisted bearer token when one exists. A missing token
    /// is sent as-is and left for the server to reject.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.bearer_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn query_pairs(query: &CollectionQuery) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", query.page.to_string()),
            ("limit", query.limit.to_string()),
        ];
        if let Some(term) = &query.search {
            pairs.push(("search", term.clone()));
        }
        if let (Some(param), Some(value)) = (R::FILTER_PARAM, &query.filter) {
            pairs.push((param, value.clone()));
        }
        pairs
    }

    async fn check(response: Response) -> GatewayResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(GatewayError::Unauthorized);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<StatusEnvelope>(&body)
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or(body);
        Err(GatewayError::Api(format!("HTTP {status}: {message}")))
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> GatewayResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

impl<R: Resource> CollectionGateway for HttpGateway<R> {
    type Entity = R::Entity;
    type Create = R::Create;
    type Update = R::Update;

    async fn list(&self, query: &CollectionQuery) -> GatewayResult<Page<R::Entity>> {
        let url = self.collection_url()?;
        log::debug!("GET {} page={} limit={}", url, query.page, query.limit);
        let response = self
            .authorize(self.http.get(url).query(&Self::query_pairs(query)))
            .send()
            .await?;
        let response = Self::check(response).await?;
        let envelope: ListEnvelope<R::Entity> = Self::decode(response).await?;
        envelope.into_page(query.limit)
    }

    async fn create(&self, payload: &R::Create) -> GatewayResult<R::Entity> {
        let url = self.collection_url()?;
        log::debug!("POST {url}");
        let response = self
            .authorize(self.http.post(url).json(payload))
            .send()
            .await?;
        let response = Self::check(response).await?;
        let envelope: ItemEnvelope<R::Entity> = Self::decode(response).await?;
        envelope.into_entity()
    }

    async fn update(&self, id: &EntityKey, updates: &R::Update) -> GatewayResult<R::Entity> {
        let url = self.item_url(id)?;
        log::debug!("PUT {url}");
        let response = self
            .authorize(self.http.put(url).json(updates))
            .send()
            .await?;
        let response = Self::check(response).await?;
        let envelope: ItemEnvelope<R::Entity> = Self::decode(response).await?;
        envelope.into_entity()
    }

    async fn delete(&self, id: &EntityKey) -> GatewayResult<()> {
        let url = self.item_url(id)?;
        log::debug!("DELETE {url}");
        let response = self.authorize(self.http.delete(url)).send().await?;
        let response = Self::check(response).await?;
        let envelope: StatusEnvelope = Self::decode(response).await?;
        envelope.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::resources::{BookingPolicies, Orders};

    #[test]
    fn query_pairs_include_filter_only_when_supported() {
        let query = CollectionQuery::new()
            .paginate(2, 10)
            .search("lavender")
            .filter("pending");

        let pairs = HttpGateway::<Orders>::query_pairs(&query);
        assert_eq!(
            pairs,
            vec![
                ("page", "2".to_string()),
                ("limit", "10".to_string()),
                ("search", "lavender".to_string()),
                ("status", "pending".to_string()),
            ]
        );

        // Policies carry no categorical filter; the value is dropped.
        let pairs = HttpGateway::<BookingPolicies>::query_pairs(&query);
        assert_eq!(
            pairs,
            vec![
                ("page", "2".to_string()),
                ("limit", "10".to_string()),
                ("search", "lavender".to_string()),
            ]
        );
    }

    #[test]
    fn empty_search_and_filter_are_omitted() {
        let query = CollectionQuery::new().search("   ").filter("");
        let pairs = HttpGateway::<Orders>::query_pairs(&query);
        assert_eq!(
            pairs,
            vec![("page", "1".to_string()), ("limit", "20".to_string())]
        );
    }
}
