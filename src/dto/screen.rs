//! DTOs shaped for the list presentation surface.

use crate::controller::{CollectionController, LoadState};
use crate::domain::Keyed;
use crate::pagination::Paginated;

/// Aggregated data required to render a list screen: the visible items with
/// their page links, plus the query context the toolbar reflects back.
#[derive(Debug)]
pub struct ListScreenData<'a, E> {
    pub list: Paginated<&'a E>,
    pub total_items: usize,
    pub search_query: Option<&'a str>,
    pub filter_value: Option<&'a str>,
    pub state: &'a LoadState,
}

impl<'a, E: Keyed> ListScreenData<'a, E> {
    pub fn from_controller(controller: &'a CollectionController<E>) -> Self {
        let search = controller.query_state().search_term();
        Self {
            list: Paginated::new(
                controller.items().iter().collect(),
                controller.query_state().page(),
                controller.total_pages(),
            ),
            total_items: controller.total_items(),
            search_query: (!search.is_empty()).then_some(search),
            filter_value: controller.query_state().filter_value(),
            state: controller.state(),
        }
    }
}
