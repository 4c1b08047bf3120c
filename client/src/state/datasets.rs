//! Dataset inventory and active-dataset selection.
//!
//! DESIGN
//! ======
//! The active dataset id is persisted so a reload returns to the same
//! dashboard. When the backend list fails the demo dataset stands in, and
//! the state remembers that it is showing demo data.

#[cfg(test)]
#[path = "datasets_test.rs"]
mod datasets_test;

use crate::net::types::DatasetSummary;
use crate::util::demo;

#[derive(Clone, Debug, Default)]
pub struct DatasetsState {
    pub items: Vec<DatasetSummary>,
    pub active_id: Option<String>,
    pub loading: bool,
    pub upload_pending: bool,
    pub error: Option<String>,
    pub is_demo: bool,
}

impl DatasetsState {
    /// Replace the list, keeping `preferred` active when it is still
    /// present and falling back to the first entry otherwise.
    pub fn set_items(&mut self, items: Vec<DatasetSummary>, preferred: Option<&str>) {
        let wanted = preferred.or(self.active_id.as_deref()).map(str::to_owned);
        self.active_id = wanted
            .filter(|id| items.iter().any(|d| &d.id == id))
            .or_else(|| items.first().map(|d| d.id.clone()));
        self.items = items;
        self.loading = false;
    }

    /// Apply a list response. Errors switch to the demo dataset.
    pub fn apply_list_result(&mut self, result: Result<Vec<DatasetSummary>, String>, preferred: Option<&str>) {
        match result {
            Ok(items) => {
                self.is_demo = false;
                self.error = None;
                self.set_items(items, preferred);
            }
            Err(e) => {
                self.is_demo = true;
                self.error = Some(e);
                self.set_items(demo::demo_datasets(), Some(demo::DEMO_DATASET_ID));
            }
        }
    }

    /// Make `id` active. Returns `false` for unknown ids.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.items.iter().any(|d| d.id == id) {
            return false;
        }
        self.active_id = Some(id.to_owned());
        true
    }

    pub fn active(&self) -> Option<&DatasetSummary> {
        let id = self.active_id.as_deref()?;
        self.items.iter().find(|d| d.id == id)
    }

    /// Insert a freshly uploaded dataset at the top and make it active.
    pub fn apply_upload(&mut self, result: Result<DatasetSummary, String>) {
        self.upload_pending = false;
        match result {
            Ok(dataset) => {
                self.items.retain(|d| d.id != dataset.id);
                self.active_id = Some(dataset.id.clone());
                self.items.insert(0, dataset);
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }

    /// Drop `id` from the list; the first remaining dataset becomes active
    /// if `id` was active.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|d| d.id != id);
        if self.active_id.as_deref() == Some(id) {
            self.active_id = self.items.first().map(|d| d.id.clone());
        }
    }
}
