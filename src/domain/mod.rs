//! Domain records managed by the dashboard and the traits the gateway and
//! controller layers rely on.

use crate::domain::types::EntityKey;

pub mod gallery;
pub mod gift_card;
pub mod order;
pub mod policy;
pub mod product;
pub mod service;
pub mod special;
pub mod types;
pub mod user;

/// A record with a stable key unique within its collection.
pub trait Keyed {
    fn key(&self) -> &EntityKey;
}

/// Server-side query semantics of a record: which fields the free-form
/// search scans and which field the categorical filter compares against.
///
/// The reference gateway in [`crate::gateway::memory`] is the only in-process
/// consumer; the HTTP gateway defers both to the backend.
pub trait Queryable: Keyed {
    /// Fields scanned by the case-insensitive substring search.
    fn haystack(&self) -> Vec<&str>;

    /// Value compared (exactly) against the categorical filter, if the
    /// collection has one.
    fn filter_field(&self) -> Option<&str> {
        None
    }
}

/// How a create payload becomes a full record, and how an update payload is
/// merged into one. Only fields populated in the update are applied.
pub trait Materialize: Keyed + Sized {
    type Create;
    type Update;

    fn materialize(key: EntityKey, payload: &Self::Create) -> Self;
    fn merge(&mut self, updates: &Self::Update);
}
