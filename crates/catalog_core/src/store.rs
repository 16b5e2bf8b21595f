use shared::domain::{Item, ALL_CATEGORY};

/// The last successfully fetched catalog. Session-lifetime state: created
/// empty, replaced wholesale by a successful load, never mutated
/// item-by-item.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    items: Vec<Item>,
    categories: Vec<String>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl CatalogStore {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            categories: vec![ALL_CATEGORY.to_string()],
        }
    }

    /// Builds a store from a completed fetch. The source-supplied category
    /// list is trusted verbatim and not cross-validated against the items;
    /// the synthetic "all" entry always comes first and is never duplicated.
    pub fn from_fetch(items: Vec<Item>, source_categories: Vec<String>) -> Self {
        let mut categories = vec![ALL_CATEGORY.to_string()];
        categories.extend(source_categories.into_iter().filter(|c| c != ALL_CATEGORY));
        Self { items, categories }
    }

    /// Items in source fetch order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn has_category(&self, label: &str) -> bool {
        self.categories.iter().any(|c| c == label)
    }
}
