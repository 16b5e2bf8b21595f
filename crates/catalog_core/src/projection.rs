//! The pure filter → sort → paginate pipeline. Deterministic and
//! side-effect-free: identical inputs always yield the identical output
//! sequence, order included.

use shared::domain::{Item, SortKey, ALL_CATEGORY};

use crate::store::CatalogStore;
use crate::view::ViewState;

/// Number of items that survive the filter stage, independent of
/// pagination. The controller uses this to decide whether another page
/// exists.
pub fn filtered_len(store: &CatalogStore, view: &ViewState) -> usize {
    if view.selected_category == ALL_CATEGORY {
        return store.items().len();
    }
    store
        .items()
        .iter()
        .filter(|item| item.category == view.selected_category)
        .count()
}

/// Derives the sequence of items to render from the two state snapshots.
pub fn project(store: &CatalogStore, view: &ViewState) -> Vec<Item> {
    let mut items: Vec<Item> = store
        .items()
        .iter()
        .filter(|item| {
            view.selected_category == ALL_CATEGORY || item.category == view.selected_category
        })
        .cloned()
        .collect();

    // Vec::sort_by is stable, so price ties keep their filter-stage order.
    match view.sort_key {
        SortKey::None => {}
        SortKey::PriceAsc => items.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => items.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    items.truncate(view.page_size.saturating_mul(view.current_page));
    items
}
