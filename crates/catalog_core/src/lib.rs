use std::{sync::Arc, time::Duration};

use shared::{
    domain::{Product, SortOrder, ViewState},
    error::LoadFailure,
    protocol::{GridContent, ViewUpdate},
};
use tokio::{
    sync::mpsc,
    task::{AbortHandle, JoinHandle},
    time::Instant,
};
use tracing::{debug, error, info};

pub mod catalog;
pub mod render;
pub mod source;
pub mod view;

pub use catalog::{derive_categories, filter_by_category, search_by_title, sort_by_price};
pub use render::render;
pub use source::{HttpProductSource, ProductSource, DEFAULT_CATALOG_URL};
pub use view::{drain_pending, pump_updates, View};

pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Fixed wait before a search renders its result.
    pub delay: Duration,
    /// Abort the still-pending search when a new one is issued. When off, every
    /// search renders and the last one to resolve owns the grid.
    pub cancel_superseded: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            delay: DEFAULT_SEARCH_DELAY,
            cancel_superseded: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { products: usize, categories: usize },
    Failed(LoadFailure),
}

/// Owns the fetched catalog and the view selections, and turns every control
/// event into [`ViewUpdate`]s for the rendering surface.
///
/// Category, sort and search each re-derive the grid from the full catalog.
/// A search issued while another is pending does not replace it unless
/// [`SearchOptions::cancel_superseded`] is set.
pub struct CatalogController<S: ProductSource> {
    source: S,
    products: Arc<Vec<Product>>,
    state: ViewState,
    search: SearchOptions,
    pending_search: Option<AbortHandle>,
    updates: mpsc::UnboundedSender<ViewUpdate>,
}

impl<S: ProductSource> CatalogController<S> {
    pub fn new(source: S) -> (Self, mpsc::UnboundedReceiver<ViewUpdate>) {
        Self::with_search_options(source, SearchOptions::default())
    }

    pub fn with_search_options(
        source: S,
        search: SearchOptions,
    ) -> (Self, mpsc::UnboundedReceiver<ViewUpdate>) {
        let (updates, rx) = mpsc::unbounded_channel();
        let controller = Self {
            source,
            products: Arc::new(Vec::new()),
            state: ViewState::default(),
            search,
            pending_search: None,
            updates,
        };
        (controller, rx)
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn search_options(&self) -> SearchOptions {
        self.search
    }

    /// Applies to searches issued after the call; pending ones keep their deadline.
    pub fn set_search_delay(&mut self, delay: Duration) {
        self.search.delay = delay;
    }

    /// One-time catalog load. A failure is reported to the view as a
    /// placeholder and returned as [`LoadOutcome::Failed`]; the loading
    /// indicator is hidden on both paths.
    pub async fn load(&mut self) -> LoadOutcome {
        self.emit(ViewUpdate::Loading(true));

        let outcome = match self.source.fetch_all().await {
            Ok(products) => {
                let categories = derive_categories(&products);
                info!(
                    products = products.len(),
                    categories = categories.len() - 1,
                    "catalog loaded"
                );
                self.products = Arc::new(products);
                self.emit(ViewUpdate::Grid(render(&self.products)));
                self.state.categories = categories.clone();
                self.emit(ViewUpdate::CategoryOptions(categories));
                LoadOutcome::Loaded {
                    products: self.products.len(),
                    categories: self.state.categories.len() - 1,
                }
            }
            Err(err) => {
                error!("error fetching products: {err}");
                self.emit(ViewUpdate::Grid(GridContent::LoadFailed));
                LoadOutcome::Failed(err)
            }
        };

        self.emit(ViewUpdate::Loading(false));
        outcome
    }

    pub fn on_category_change(&mut self, selected: &str) {
        debug!(category = selected, "category changed");
        self.state.selected_category = selected.to_string();
        let filtered = filter_by_category(&self.products, selected);
        self.emit(ViewUpdate::Grid(render(&filtered)));
    }

    /// `low` and `high` sort a copy of the catalog by price; any other value
    /// renders the catalog order.
    pub fn on_sort_change(&mut self, value: &str) {
        let order = SortOrder::from_selector_value(value);
        debug!(order = order.selector_value(), "sort changed");
        self.state.sort_order = order;
        let sorted = sort_by_price(&self.products, order);
        self.emit(ViewUpdate::Grid(render(&sorted)));
    }

    /// Shows the loading indicator and schedules the title search to render
    /// once the search delay has elapsed.
    pub fn on_search(&mut self, query: &str) -> JoinHandle<()> {
        debug!(query, delay_ms = self.search.delay.as_millis() as u64, "search scheduled");
        self.state.search_text = query.to_string();
        self.emit(ViewUpdate::Loading(true));

        if self.search.cancel_superseded {
            if let Some(pending) = self.pending_search.take() {
                pending.abort();
            }
        }

        let deadline = Instant::now() + self.search.delay;
        let products = Arc::clone(&self.products);
        let updates = self.updates.clone();
        let query = query.to_string();
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let matches = search_by_title(&products, &query);
            debug!(query = %query, matches = matches.len(), "search resolved");
            let _ = updates.send(ViewUpdate::Grid(render(&matches)));
            let _ = updates.send(ViewUpdate::Loading(false));
        });
        self.pending_search = Some(handle.abort_handle());
        handle
    }

    pub fn on_toggle_theme(&mut self) {
        self.state.theme_is_dark = !self.state.theme_is_dark;
        debug!(dark = self.state.theme_is_dark, "theme toggled");
        self.emit(ViewUpdate::DarkMode(self.state.theme_is_dark));
        self.emit(ViewUpdate::ThemeLabel(
            self.state.theme_toggle_label().to_string(),
        ));
    }

    fn emit(&self, update: ViewUpdate) {
        if self.updates.send(update).is_err() {
            debug!("view update dropped; receiver closed");
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
