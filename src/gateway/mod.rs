//! The remote collection gateway: everything that turns a query into a page
//! of records or mutates a single record.
//!
//! [`CollectionGateway`] is the seam the controller layer is written against.
//! The [`http`] module speaks the admin REST API; [`memory`] carries the
//! reference query semantics and backs the test suite.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::Keyed;
use crate::domain::types::EntityKey;

pub mod errors;
#[cfg(feature = "http")]
pub mod http;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod resources;

pub use errors::{GatewayError, GatewayResult};

/// Parameters determining which slice of a collection is fetched.
///
/// Filtering and pagination are server-authoritative: the gateway forwards
/// these parameters and never post-processes the returned page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionQuery {
    pub page: usize,
    pub limit: usize,
    pub search: Option<String>,
    pub filter: Option<String>,
}

impl CollectionQuery {
    pub fn new() -> Self {
        Self {
            page: 1,
            limit: crate::DEFAULT_ITEMS_PER_PAGE,
            search: None,
            filter: None,
        }
    }

    pub fn paginate(mut self, page: usize, limit: usize) -> Self {
        self.page = if page == 0 { 1 } else { page };
        self.limit = limit;
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.trim().is_empty() {
            None
        } else {
            Some(term.trim().to_string())
        };
        self
    }

    pub fn filter(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.filter = if value.trim().is_empty() {
            None
        } else {
            Some(value.trim().to_string())
        };
        self
    }
}

impl Default for CollectionQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// One fetched slice of a remote collection, already normalized from the
/// wire envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<E> {
    pub items: Vec<E>,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Static description of one managed collection: the entity triple plus the
/// REST surface it lives behind.
pub trait Resource {
    type Entity: Keyed + Clone + Serialize + DeserializeOwned + Send + Sync + 'static;
    type Create: Serialize + Send + Sync;
    type Update: Serialize + Send + Sync;

    /// Path segment under the API base URL, e.g. `orders`.
    const PATH: &'static str;
    /// Query-string parameter carrying the categorical filter, if any.
    const FILTER_PARAM: Option<&'static str>;
}

/// Network-facing operations on one collection.
///
/// All failures are returned as [`GatewayError`] values; implementations do
/// not retry and do not panic.
#[allow(async_fn_in_trait)]
pub trait CollectionGateway {
    type Entity: Keyed + Clone;
    type Create;
    type Update;

    async fn list(&self, query: &CollectionQuery) -> GatewayResult<Page<Self::Entity>>;
    async fn create(&self, payload: &Self::Create) -> GatewayResult<Self::Entity>;
    async fn update(
        &self,
        id: &EntityKey,
        updates: &Self::Update,
    ) -> GatewayResult<Self::Entity>;
    async fn delete(&self, id: &EntityKey) -> GatewayResult<()>;
}
