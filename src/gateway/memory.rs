//! In-memory [`CollectionGateway`] carrying the canonical server-side query
//! semantics: filter first, then search, then paginate.
//!
//! The test suite runs against this implementation, and it doubles as a
//! stand-in backend for demos. The HTTP gateway defers the same semantics to
//! the real server.

use std::sync::Mutex;

use uuid::Uuid;

use crate::domain::types::EntityKey;
use crate::domain::{Keyed, Materialize, Queryable};
use crate::gateway::{CollectionGateway, CollectionQuery, GatewayError, GatewayResult, Page, Resource};

pub struct MemoryGateway<R>
where
    R: Resource,
    R::Entity: Materialize<Create = R::Create, Update = R::Update> + Queryable,
{
    records: Mutex<Vec<R::Entity>>,
}

impl<R> MemoryGateway<R>
where
    R: Resource,
    R::Entity: Materialize<Create = R::Create, Update = R::Update> + Queryable,
{
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Starts the collection pre-populated, preserving insertion order.
    pub fn with_records(records: Vec<R::Entity>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Snapshot of the full collection, ignoring any query.
    pub fn records(&self) -> GatewayResult<Vec<R::Entity>> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> GatewayResult<std::sync::MutexGuard<'_, Vec<R::Entity>>> {
        self.records
            .lock()
            .map_err(|_| GatewayError::Unexpected("record store lock poisoned".to_string()))
    }

    fn matches(entity: &R::Entity, query: &CollectionQuery) -> bool {
        if let Some(value) = &query.filter
            && !entity.filter_field().is_some_and(|field| field == value)
        {
            return false;
        }
        if let Some(term) = &query.search {
            let needle = term.to_lowercase();
            return entity
                .haystack()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
        }
        true
    }
}

impl<R> Default for MemoryGateway<R>
where
    R: Resource,
    R::Entity: Materialize<Create = R::Create, Update = R::Update> + Queryable,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R> CollectionGateway for MemoryGateway<R>
where
    R: Resource,
    R::Entity: Materialize<Create = R::Create, Update = R::Update> + Queryable,
{
    type Entity = R::Entity;
    type Create = R::Create;
    type Update = R::Update;

    async fn list(&self, query: &CollectionQuery) -> GatewayResult<Page<R::Entity>> {
        let records = self.lock()?;
        let matching: Vec<&R::Entity> = records
            .iter()
            .filter(|entity| Self::matches(entity, query))
            .collect();

        let total_items = matching.len();
        let total_pages = if query.limit == 0 {
            0
        } else {
            total_items.div_ceil(query.limit)
        };
        let offset = query.page.saturating_sub(1) * query.limit;
        let items = matching
            .into_iter()
            .skip(offset)
            .take(query.limit)
            .cloned()
            .collect();

        Ok(Page {
            items,
            total_items,
            total_pages,
        })
    }

    async fn create(&self, payload: &R::Create) -> GatewayResult<R::Entity> {
        let key = EntityKey::new(Uuid::new_v4().to_string())?;
        let entity = R::Entity::materialize(key, payload);
        self.lock()?.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: &EntityKey, updates: &R::Update) -> GatewayResult<R::Entity> {
        let mut records = self.lock()?;
        let entity = records
            .iter_mut()
            .find(|entity| entity.key() == id)
            .ok_or(GatewayError::NotFound)?;
        entity.merge(updates);
        Ok(entity.clone())
    }

    async fn delete(&self, id: &EntityKey) -> GatewayResult<()> {
        let mut records = self.lock()?;
        let position = records
            .iter()
            .position(|entity| entity.key() == id)
            .ok_or(GatewayError::NotFound)?;
        records.remove(position);
        Ok(())
    }
}
