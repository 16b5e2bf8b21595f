use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{
    domain::{Item, ItemId, SortKey},
    error::FetchError,
};
use tokio::sync::{broadcast, Mutex};
use tracing::{info, warn};

pub mod projection;
pub mod store;
pub mod view;

pub use store::CatalogStore;
pub use view::ViewState;

/// Supplies the full item catalog and the category label list.
/// Asynchronous and fallible; the two fetches are independent calls and
/// degrade independently.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_items(&self) -> Result<Vec<Item>, FetchError>;
    async fn fetch_categories(&self) -> Result<Vec<String>, FetchError>;
}

/// Null source for wiring a controller without a backend; every fetch
/// fails.
pub struct MissingCatalogSource;

#[async_trait]
impl CatalogSource for MissingCatalogSource {
    async fn fetch_items(&self) -> Result<Vec<Item>, FetchError> {
        Err(FetchError::transport("catalog source is unavailable"))
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, FetchError> {
        Err(FetchError::transport("catalog source is unavailable"))
    }
}

/// Remote catalog over HTTP: `GET {base}/products` for items and
/// `GET {base}/products/categories` for the label list.
pub struct HttpCatalogSource {
    http: Client,
    base_url: String,
}

impl HttpCatalogSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let response = self
            .http
            .get(format!("{}/{path}", self.base_url))
            .send()
            .await
            .map_err(|err| FetchError::transport(err.to_string()))?
            .error_for_status()
            .map_err(|err| FetchError::transport(err.to_string()))?;
        response
            .json()
            .await
            .map_err(|err| FetchError::decode(err.to_string()))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_items(&self) -> Result<Vec<Item>, FetchError> {
        self.get_json("products").await
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, FetchError> {
        self.get_json("products/categories").await
    }
}

/// Read-only view handed to any presentation. Presentation renders this
/// and talks back exclusively through the controller's intent methods.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub displayed: Vec<Item>,
    pub categories: Vec<String>,
    pub selected_category: String,
    pub sort_key: SortKey,
    pub is_loading: bool,
    pub expanded: Option<ItemId>,
}

struct ControllerState {
    store: CatalogStore,
    view: ViewState,
    is_loading: bool,
}

/// Owns the catalog store and view state. All mutation goes through
/// `load()` and the named intent methods; after every transition the
/// projection is recomputed and a fresh snapshot is published.
pub struct CatalogController {
    source: Arc<dyn CatalogSource>,
    inner: Mutex<ControllerState>,
    snapshots: broadcast::Sender<CatalogSnapshot>,
}

impl CatalogController {
    pub fn new(source: Arc<dyn CatalogSource>, page_size: usize) -> Arc<Self> {
        let (snapshots, _) = broadcast::channel(64);
        Arc::new(Self {
            source,
            inner: Mutex::new(ControllerState {
                store: CatalogStore::empty(),
                view: ViewState::new(page_size),
                is_loading: false,
            }),
            snapshots,
        })
    }

    /// Fetches the full catalog once and replaces the store atomically.
    ///
    /// The `is_loading` gate makes concurrent calls cheap no-ops: only one
    /// fetch is ever in flight, however fast scroll events arrive. A failed
    /// item fetch leaves the store as it was and is returned to the caller;
    /// a failed category fetch degrades to the "all"-only list.
    pub async fn load(&self) -> Result<(), FetchError> {
        {
            let mut inner = self.inner.lock().await;
            if inner.is_loading {
                return Ok(());
            }
            inner.is_loading = true;
            self.publish(&mut inner);
        }

        // The fetches run outside the lock so intents stay responsive.
        let items = self.source.fetch_items().await;
        let categories = self.source.fetch_categories().await;

        let mut inner = self.inner.lock().await;
        inner.is_loading = false;
        let result = match items {
            Ok(items) => {
                let categories = match categories {
                    Ok(labels) => labels,
                    Err(err) => {
                        warn!("catalog: category fetch failed, filtering limited to \"all\": {err}");
                        Vec::new()
                    }
                };
                inner.store = CatalogStore::from_fetch(items, categories);
                info!(
                    "catalog: loaded {} items, {} categories",
                    inner.store.items().len(),
                    inner.store.categories().len()
                );
                Ok(())
            }
            Err(err) => {
                warn!("catalog: load failed, store unchanged: {err}");
                Err(err)
            }
        };
        self.publish(&mut inner);
        result
    }

    /// Selects a category filter and rewinds to the first page. Unknown
    /// labels are rejected as a no-op rather than silently filtering the
    /// display down to nothing.
    pub async fn set_category(&self, category: &str) {
        let mut inner = self.inner.lock().await;
        if !inner.store.has_category(category) {
            warn!("catalog: ignoring unknown category {category:?}");
            return;
        }
        if inner.view.selected_category != category {
            inner.view = inner.view.with_category(category);
        }
        self.publish(&mut inner);
    }

    pub async fn set_sort(&self, sort_key: SortKey) {
        let mut inner = self.inner.lock().await;
        inner.view = inner.view.with_sort(sort_key);
        self.publish(&mut inner);
    }

    /// Extends the visible window by one page when the filtered set still
    /// has undisplayed items. Idempotent at the end of the set and inert
    /// while a load is in flight.
    pub async fn load_more(&self) {
        let mut inner = self.inner.lock().await;
        if inner.is_loading {
            return;
        }
        let filtered = projection::filtered_len(&inner.store, &inner.view);
        let window = inner.view.page_size.saturating_mul(inner.view.current_page);
        if filtered > window {
            inner.view = inner.view.next_page();
        }
        self.publish(&mut inner);
    }

    /// Expands `id`, or collapses it if it is already expanded. Ids not in
    /// the current projection output are ignored so the expansion always
    /// references a displayed item.
    pub async fn toggle_expand(&self, id: ItemId) {
        let mut inner = self.inner.lock().await;
        if inner.view.expanded != Some(id) {
            let displayed = projection::project(&inner.store, &inner.view);
            if !displayed.iter().any(|item| item.id == id) {
                return;
            }
        }
        inner.view = inner.view.toggled(id);
        self.publish(&mut inner);
    }

    pub async fn snapshot(&self) -> CatalogSnapshot {
        let mut inner = self.inner.lock().await;
        Self::snapshot_of(&mut inner)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CatalogSnapshot> {
        self.snapshots.subscribe()
    }

    /// Recomputes the projection from the current snapshots and broadcasts
    /// it. Every state transition funnels through here, which is the whole
    /// re-render rule: no hidden dependency tracking.
    fn publish(&self, inner: &mut ControllerState) {
        let snapshot = Self::snapshot_of(inner);
        let _ = self.snapshots.send(snapshot);
    }

    fn snapshot_of(inner: &mut ControllerState) -> CatalogSnapshot {
        let displayed = projection::project(&inner.store, &inner.view);
        // A transition may have pushed the expanded item out of view;
        // the expansion invariant says it must reference a displayed id.
        if let Some(id) = inner.view.expanded {
            if !displayed.iter().any(|item| item.id == id) {
                inner.view = inner.view.with_expanded(None);
            }
        }
        CatalogSnapshot {
            displayed,
            categories: inner.store.categories().to_vec(),
            selected_category: inner.view.selected_category.clone(),
            sort_key: inner.view.sort_key,
            is_loading: inner.is_loading,
            expanded: inner.view.expanded,
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
