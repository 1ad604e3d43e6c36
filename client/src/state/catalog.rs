//! Item catalog state for the browse view.
//!
//! DESIGN
//! ======
//! The catalog is fetched once per mount and filtered entirely on the
//! client. The visible list is recomputed from scratch on every search
//! keystroke or filter click, which is linear in the catalog size.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::error::PortalError;
use crate::net::types::{Item, ItemStatus};

/// Status filter tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ItemStatus),
}

impl StatusFilter {
    pub const TABS: [Self; 3] = [Self::All, Self::Only(ItemStatus::Lost), Self::Only(ItemStatus::Found)];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(status) => status.as_str(),
        }
    }

    pub fn admits(self, status: ItemStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

/// Visibility predicate: status filter AND case-insensitive substring match
/// on name or description.
pub fn is_visible(item: &Item, filter: StatusFilter, search: &str) -> bool {
    if !filter.admits(item.status) {
        return false;
    }
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    item.name.to_lowercase().contains(&needle) || item.description.to_lowercase().contains(&needle)
}

/// Browse-view catalog plus the claim selection it feeds.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub items: Vec<Item>,
    pub search: String,
    pub filter: StatusFilter,
    pub loading: bool,
    /// Item bound to the open claim modal, if any.
    pub claiming: Option<Item>,
    /// Last claim confirmation, shown above the grid.
    pub notice: Option<String>,
    requested: bool,
}

impl CatalogState {
    /// Mark the one load this mount is allowed. Returns `false` if already requested.
    pub fn begin_load(&mut self) -> bool {
        if self.requested {
            return false;
        }
        self.requested = true;
        self.loading = true;
        true
    }

    /// Store fetched items; failures are logged and leave the catalog empty.
    pub fn apply_loaded(&mut self, outcome: Result<Vec<Item>, PortalError>) {
        self.loading = false;
        match outcome {
            Ok(items) => {
                log::debug!("catalog loaded: {} items", items.len());
                self.items = items;
            }
            Err(e) => log::warn!("error fetching items: {e}"),
        }
    }

    pub fn set_search(&mut self, text: String) {
        self.search = text;
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    pub fn visible_items(&self) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| is_visible(item, self.filter, &self.search))
            .cloned()
            .collect()
    }

    /// Open the claim modal for `item_id`. Refused while another claim is open
    /// or when the id is not in the catalog.
    pub fn select(&mut self, item_id: &str) -> bool {
        if self.claiming.is_some() {
            return false;
        }
        let Some(item) = self.items.iter().find(|i| i.id == item_id) else {
            return false;
        };
        self.claiming = Some(item.clone());
        self.notice = None;
        true
    }

    /// Close the claim modal; `notice` is shown when the claim went through.
    pub fn close_claim(&mut self, notice: Option<String>) {
        self.claiming = None;
        self.notice = notice;
    }
}
