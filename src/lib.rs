pub mod controller;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod gateway;
pub mod models;
pub mod pagination;
pub mod session;

/// Page size used when the configuration does not override it.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

#[cfg(feature = "http")]
pub use app::{Backoffice, Screen};

#[cfg(feature = "http")]
mod app {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::controller::{CollectionController, ControllerResult};
    use crate::gateway::http::HttpGateway;
    use crate::gateway::resources::{
        BookingPolicies, GalleryImages, GiftCards, MonthlySpecials, Orders, Products, SpaServices,
        Users,
    };
    use crate::gateway::{GatewayError, Resource};
    use crate::models::config::ClientConfig;
    use crate::session::SessionStore;

    /// One list screen of the dashboard: a collection controller paired with
    /// the gateway it fetches through.
    pub struct Screen<R: Resource> {
        pub controller: CollectionController<R::Entity>,
        pub gateway: HttpGateway<R>,
    }

    impl<R: Resource> Screen<R> {
        fn new(gateway: HttpGateway<R>, items_per_page: usize) -> Self {
            Self {
                controller: CollectionController::new(items_per_page),
                gateway,
            }
        }

        /// Re-issues the current query against the remote collection.
        pub async fn refetch(&mut self) -> ControllerResult<()> {
            self.controller.refetch(&self.gateway).await
        }

        /// Applies a search term and reloads the list from page one.
        pub async fn search(&mut self, term: &str) -> ControllerResult<()> {
            self.controller.search(&self.gateway, term).await
        }

        /// Applies a categorical filter and reloads the list from page one.
        pub async fn filter(&mut self, value: Option<&str>) -> ControllerResult<()> {
            self.controller.filter(&self.gateway, value).await
        }

        /// Navigates to the given page. Out-of-range pages are ignored.
        pub async fn goto_page(&mut self, page: usize) -> ControllerResult<bool> {
            self.controller.goto_page(&self.gateway, page).await
        }

        /// Executes the pending confirmed deletion, if any.
        pub async fn confirm_delete(&mut self) -> ControllerResult<bool> {
            self.controller.confirm_delete(&self.gateway).await
        }
    }

    /// The assembled dashboard client: the shared HTTP client, the persisted
    /// auth session, and one [`Screen`] per managed collection.
    pub struct Backoffice {
        pub session: Arc<SessionStore>,
        pub orders: Screen<Orders>,
        pub products: Screen<Products>,
        pub gift_cards: Screen<GiftCards>,
        pub services: Screen<SpaServices>,
        pub users: Screen<Users>,
        pub policies: Screen<BookingPolicies>,
        pub specials: Screen<MonthlySpecials>,
        pub gallery: Screen<GalleryImages>,
    }

    impl Backoffice {
        /// Wires every screen against the configured API base URL.
        pub fn new(config: &ClientConfig) -> Result<Self, GatewayError> {
            let session = Arc::new(SessionStore::new(&config.session_file));
            let http = reqwest::Client::builder()
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .build()?;
            let per_page = config.items_per_page;

            fn screen<R: Resource>(
                http: &reqwest::Client,
                base: &str,
                session: &Arc<SessionStore>,
                per_page: usize,
            ) -> Result<Screen<R>, GatewayError> {
                Ok(Screen::new(
                    HttpGateway::new(http.clone(), base, session.clone())?,
                    per_page,
                ))
            }

            let base = config.api_base_url.as_str();
            Ok(Self {
                orders: screen(&http, base, &session, per_page)?,
                products: screen(&http, base, &session, per_page)?,
                gift_cards: screen(&http, base, &session, per_page)?,
                services: screen(&http, base, &session, per_page)?,
                users: screen(&http, base, &session, per_page)?,
                policies: screen(&http, base, &session, per_page)?,
                specials: screen(&http, base, &session, per_page)?,
                gallery: screen(&http, base, &session, per_page)?,
                session,
            })
        }
    }
}
