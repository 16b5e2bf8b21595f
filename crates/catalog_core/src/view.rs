use shared::domain::{ItemId, SortKey, ALL_CATEGORY};

/// The user's current filter/sort/pagination/expansion choices. One
/// immutable value: every intent handler replaces it wholesale through the
/// reducer methods below, so state and projection inputs are always plain
/// snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub selected_category: String,
    pub sort_key: SortKey,
    pub page_size: usize,
    pub current_page: usize,
    pub expanded: Option<ItemId>,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            selected_category: ALL_CATEGORY.to_string(),
            sort_key: SortKey::None,
            // page_size is fixed for the session and must stay positive.
            page_size: page_size.max(1),
            current_page: 1,
            expanded: None,
        }
    }

    /// Switching category always rewinds pagination to the first page.
    pub fn with_category(&self, category: impl Into<String>) -> Self {
        Self {
            selected_category: category.into(),
            current_page: 1,
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort_key: SortKey) -> Self {
        Self {
            sort_key,
            ..self.clone()
        }
    }

    pub fn next_page(&self) -> Self {
        Self {
            current_page: self.current_page + 1,
            ..self.clone()
        }
    }

    pub fn with_expanded(&self, expanded: Option<ItemId>) -> Self {
        Self {
            expanded,
            ..self.clone()
        }
    }

    /// Expansion toggle: same id collapses, a different id replaces the
    /// current expansion (at most one item expanded at a time).
    pub fn toggled(&self, id: ItemId) -> Self {
        let expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
        self.with_expanded(expanded)
    }
}
