//! The paginated collection controller: the single source of truth for what
//! subset of a remote collection is currently visible and why.
//!
//! Each controller owns its query state and page result; nothing is shared
//! between screens. Fetches are tagged with a generation so that overlapping
//! requests resolve last-request-wins: a response is only applied when it
//! belongs to the most recent request, regardless of arrival order.

use thiserror::Error;

use crate::domain::Keyed;
use crate::domain::types::EntityKey;
use crate::gateway::{CollectionGateway, CollectionQuery, GatewayError, Page};

pub mod confirm;

pub use confirm::{ConfirmationGate, PendingConfirmation};

#[derive(Debug, Error)]
pub enum ControllerError {
    /// Input rejected before any network call was made.
    #[error("Form validation error: {0}")]
    Form(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

pub type ControllerResult<T> = Result<T, ControllerError>;

/// Fetch lifecycle of a controller. `Ready` and `Error` persist until the
/// next action; there is no automatic retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Error(String),
}

/// Parameters determining which page result the controller wants.
///
/// Invariant: the page resets to 1 whenever the search term or the filter
/// value changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    page: usize,
    page_size: usize,
    search_term: String,
    filter_value: Option<String>,
}

impl QueryState {
    fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size,
            search_term: String::new(),
            filter_value: None,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filter_value(&self) -> Option<&str> {
        self.filter_value.as_deref()
    }

    fn to_query(&self) -> CollectionQuery {
        let mut query = CollectionQuery::new().paginate(self.page, self.page_size);
        if !self.search_term.is_empty() {
            query = query.search(self.search_term.clone());
        }
        if let Some(value) = &self.filter_value {
            query = query.filter(value.clone());
        }
        query
    }
}

/// Snapshot of one issued fetch. Holds the query as it was at issue time and
/// the generation used to decide whether the response is still wanted.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    query: CollectionQuery,
}

impl FetchTicket {
    pub fn query(&self) -> &CollectionQuery {
        &self.query
    }
}

pub struct CollectionController<E: Keyed> {
    query: QueryState,
    page_result: Option<Page<E>>,
    state: LoadState,
    generation: u64,
    gate: ConfirmationGate,
}

impl<E: Keyed> CollectionController<E> {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: QueryState::new(page_size.max(1)),
            page_result: None,
            state: LoadState::Idle,
            generation: 0,
            gate: ConfirmationGate::new(),
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn query_state(&self) -> &QueryState {
        &self.query
    }

    /// Items of the current page result; empty before the first fetch.
    pub fn items(&self) -> &[E] {
        self.page_result
            .as_ref()
            .map(|page| page.items.as_slice())
            .unwrap_or_default()
    }

    pub fn page_result(&self) -> Option<&Page<E>> {
        self.page_result.as_ref()
    }

    pub fn total_items(&self) -> usize {
        self.page_result
            .as_ref()
            .map(|page| page.total_items)
            .unwrap_or_default()
    }

    pub fn total_pages(&self) -> usize {
        self.page_result
            .as_ref()
            .map(|page| page.total_pages)
            .unwrap_or_default()
    }

    pub fn pending_delete(&self) -> Option<&PendingConfirmation> {
        self.gate.pending()
    }

    // --- query mutations -------------------------------------------------

    /// Updates the search term and resets the page to 1. Returns whether the
    /// term actually changed. An empty term clears the search.
    pub fn set_search_term(&mut self, term: &str) -> bool {
        let term = term.trim();
        if self.query.search_term == term {
            return false;
        }
        self.query.search_term = term.to_string();
        self.query.page = 1;
        true
    }

    /// Updates the categorical filter and resets the page to 1. Returns
    /// whether the value actually changed.
    pub fn set_filter_value(&mut self, value: Option<&str>) -> bool {
        let value = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);
        if self.query.filter_value == value {
            return false;
        }
        self.query.filter_value = value;
        self.query.page = 1;
        true
    }

    /// Moves to page `n`. A no-op returning `false` when `n` is outside
    /// `1..=total_pages`; the query state is left unchanged.
    pub fn set_page(&mut self, n: usize) -> bool {
        if n < 1 || n > self.total_pages() {
            return false;
        }
        self.query.page = n;
        true
    }

    // --- fetch lifecycle -------------------------------------------------

    /// Starts a fetch: snapshots the current query, bumps the generation and
    /// enters `Loading`. The returned ticket must be handed back to
    /// [`complete_fetch`](Self::complete_fetch) or
    /// [`fail_fetch`](Self::fail_fetch) with the outcome.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        FetchTicket {
            generation: self.generation,
            query: self.query.to_query(),
        }
    }

    /// Installs a fetched page, replacing the previous page result entirely.
    /// Stale tickets are dropped and `false` is returned.
    pub fn complete_fetch(&mut self, ticket: &FetchTicket, page: Page<E>) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "Dropping stale page result (generation {} superseded by {})",
                ticket.generation,
                self.generation
            );
            return false;
        }
        self.page_result = Some(page);
        self.state = LoadState::Ready;
        true
    }

    /// Records a failed fetch, leaving the previous page result visible.
    /// Stale tickets are dropped and `false` is returned.
    pub fn fail_fetch(&mut self, ticket: &FetchTicket, error: &GatewayError) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "Dropping stale fetch failure (generation {} superseded by {})",
                ticket.generation,
                self.generation
            );
            return false;
        }
        log::error!("Failed to fetch collection page: {error}");
        self.state = LoadState::Error(error.to_string());
        true
    }

    /// Invalidates every in-flight fetch. Called when the owning view goes
    /// away so that late responses cannot touch state.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    // --- gateway-driven operations ---------------------------------------

    /// Re-issues the current query and installs the outcome.
    pub async fn refetch<G>(&mut self, gateway: &G) -> ControllerResult<()>
    where
        G: CollectionGateway<Entity = E> + ?Sized,
    {
        let ticket = self.begin_fetch();
        match gateway.list(ticket.query()).await {
            Ok(page) => {
                self.complete_fetch(&ticket, page);
                Ok(())
            }
            Err(err) => {
                self.fail_fetch(&ticket, &err);
                Err(err.into())
            }
        }
    }

    /// Applies a search term and reloads from page 1.
    pub async fn search<G>(&mut self, gateway: &G, term: &str) -> ControllerResult<()>
    where
        G: CollectionGateway<Entity = E> + ?Sized,
    {
        self.set_search_term(term);
        self.refetch(gateway).await
    }

    /// Applies a categorical filter and reloads from page 1.
    pub async fn filter<G>(&mut self, gateway: &G, value: Option<&str>) -> ControllerResult<()>
    where
        G: CollectionGateway<Entity = E> + ?Sized,
    {
        self.set_filter_value(value);
        self.refetch(gateway).await
    }

    /// Navigates to the given page and reloads. Out-of-range pages are
    /// ignored and reported as `Ok(false)` without touching any state.
    pub async fn goto_page<G>(&mut self, gateway: &G, n: usize) -> ControllerResult<bool>
    where
        G: CollectionGateway<Entity = E> + ?Sized,
    {
        if !self.set_page(n) {
            return Ok(false);
        }
        self.refetch(gateway).await?;
        Ok(true)
    }

    /// Creates a record, then reloads the current page so the list reflects
    /// the server's ordering. The created record is returned even when the
    /// follow-up reload fails; the reload failure lands in [`LoadState`].
    pub async fn create<G>(&mut self, gateway: &G, payload: &G::Create) -> ControllerResult<E>
    where
        G: CollectionGateway<Entity = E> + ?Sized,
    {
        let entity = gateway.create(payload).await?;
        if let Err(err) = self.refetch(gateway).await {
            log::error!("Failed to reload list after create: {err}");
        }
        Ok(entity)
    }

    /// Updates a record, then reloads the current page.
    pub async fn update<G>(
        &mut self,
        gateway: &G,
        id: &EntityKey,
        updates: &G::Update,
    ) -> ControllerResult<E>
    where
        G: CollectionGateway<Entity = E> + ?Sized,
    {
        let entity = gateway.update(id, updates).await?;
        if let Err(err) = self.refetch(gateway).await {
            log::error!("Failed to reload list after update: {err}");
        }
        Ok(entity)
    }

    // --- deletion --------------------------------------------------------

    /// Opens a confirmation request for the given record. The collection is
    /// not touched until [`confirm_delete`](Self::confirm_delete).
    pub fn request_delete(&mut self, target_id: EntityKey, target_label: impl Into<String>) {
        self.gate.open(target_id, target_label);
    }

    /// Closes the confirmation request without acting.
    pub fn cancel_delete(&mut self) {
        self.gate.cancel();
    }

    /// Executes the pending deletion. On success the record is removed from
    /// the in-memory list by key match (no forced refetch) and the totals
    /// are adjusted. On failure the list is left untouched. In both cases
    /// the confirmation request is closed. Returns `Ok(false)` when nothing
    /// was pending.
    pub async fn confirm_delete<G>(&mut self, gateway: &G) -> ControllerResult<bool>
    where
        G: CollectionGateway<Entity = E> + ?Sized,
    {
        let Some(pending) = self.gate.confirm() else {
            return Ok(false);
        };

        match gateway.delete(&pending.target_id).await {
            Ok(()) => {
                self.remove_local(&pending.target_id);
                Ok(true)
            }
            Err(err) => {
                log::error!("Failed to delete {}: {err}", pending.target_id);
                Err(err.into())
            }
        }
    }

    fn remove_local(&mut self, id: &EntityKey) {
        let Some(page) = &mut self.page_result else {
            return;
        };
        if let Some(position) = page.items.iter().position(|entity| entity.key() == id) {
            page.items.remove(position);
            page.total_items = page.total_items.saturating_sub(1);
            page.total_pages = page.total_items.div_ceil(self.query.page_size);
        }
    }
}
