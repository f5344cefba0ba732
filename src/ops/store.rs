use std::path::{Path, PathBuf};

use crate::io::store_io::{self, StoreError};
use crate::model::config::StoreSettings;
use crate::model::item::Item;
use crate::ops::reconcile::{reconcile, reconciled_index};

/// Error type for item operations
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item index out of range: {0}")]
    IndexOutOfRange(usize),
}

/// The checklist: an ordered item list bound to its backing file.
///
/// Every mutation rewrites the whole file. Read and write failures are logged
/// and swallowed; the most recent write failure is kept for display.
#[derive(Debug)]
pub struct ItemStore {
    path: PathBuf,
    items: Vec<Item>,
    settings: StoreSettings,
    last_save_error: Option<String>,
}

impl ItemStore {
    /// Open the store, loading `path`. An unreadable file gives an empty list.
    pub fn open(path: impl Into<PathBuf>, settings: StoreSettings) -> Self {
        let mut store = ItemStore {
            path: path.into(),
            items: Vec::new(),
            settings,
            last_save_error: None,
        };
        store.reload();
        store
    }

    /// Build a store over `items` without touching the file.
    pub fn with_items(path: impl Into<PathBuf>, settings: StoreSettings, items: Vec<Item>) -> Self {
        ItemStore {
            path: path.into(),
            items,
            settings,
            last_save_error: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn settings(&self) -> StoreSettings {
        self.settings
    }

    pub fn last_save_error(&self) -> Option<&str> {
        self.last_save_error.as_deref()
    }

    /// Replace the in-memory list with the file's contents.
    pub fn reload(&mut self) {
        self.items = match store_io::read_items(&self.path, self.settings.order) {
            Ok(parsed) => {
                if !parsed.dropped.is_empty() {
                    tracing::warn!(
                        path = %self.path.display(),
                        dropped = parsed.dropped.len(),
                        "skipped lines with no item text"
                    );
                }
                tracing::debug!(path = %self.path.display(), items = parsed.items.len(), "loaded");
                parsed.items
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!(path = %self.path.display(), "no checklist file yet");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load checklist");
                Vec::new()
            }
        };
    }

    /// Rewrite the backing file. Returns false (and logs) on failure.
    pub fn save(&mut self) -> bool {
        match store_io::write_items(&self.path, &self.items, self.settings.write) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), items = self.items.len(), "saved");
                self.last_save_error = None;
                true
            }
            Err(e) => {
                self.record_save_error(&e);
                false
            }
        }
    }

    fn record_save_error(&mut self, e: &StoreError) {
        tracing::warn!(error = %e, "failed to save checklist");
        self.last_save_error = Some(e.to_string());
    }

    /// Add an unchecked item at the top. Returns false if the text is empty.
    pub fn add(&mut self, text: &str) -> bool {
        self.add_item(text, false)
    }

    /// Add an item at the top (index 0). No re-sort happens until the next edit.
    pub fn add_item(&mut self, text: &str, checked: bool) -> bool {
        let text = normalize_text(text);
        if text.is_empty() {
            return false;
        }
        self.items.insert(0, Item::new(text, checked));
        self.save();
        true
    }

    /// Set an item's checked state. Returns the item's index after re-sorting.
    pub fn set_checked(&mut self, index: usize, checked: bool) -> Result<usize, ItemError> {
        self.check_index(index)?;
        self.items[index].checked = checked;
        Ok(self.settle(index))
    }

    /// Flip an item's checked state. Returns the item's index after re-sorting.
    pub fn toggle(&mut self, index: usize) -> Result<usize, ItemError> {
        self.check_index(index)?;
        let checked = !self.items[index].checked;
        self.set_checked(index, checked)
    }

    /// Replace an item's text. Empty text deletes the item and returns `None`;
    /// otherwise returns the item's index after re-sorting.
    pub fn set_text(&mut self, index: usize, text: &str) -> Result<Option<usize>, ItemError> {
        self.check_index(index)?;
        let text = normalize_text(text);
        if text.is_empty() {
            self.items.remove(index);
            self.resort();
            return Ok(None);
        }
        self.items[index].text = text;
        Ok(Some(self.settle(index)))
    }

    /// Delete an item.
    pub fn remove(&mut self, index: usize) -> Result<Item, ItemError> {
        self.check_index(index)?;
        let item = self.items.remove(index);
        self.resort();
        Ok(item)
    }

    /// Move an item to `to` (clamped to the end of the list). A move past the
    /// edge of the item's checked group stops at that edge. Returns the final index.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<usize, ItemError> {
        self.check_index(from)?;
        let item = self.items.remove(from);
        let to = to.min(self.items.len());
        self.items.insert(to, item);
        Ok(self.settle(to))
    }

    /// Re-partition the list and rewrite the file.
    pub fn resort(&mut self) {
        let items = std::mem::take(&mut self.items);
        self.items = reconcile(items, self.settings.policy, self.settings.order);
        self.save();
    }

    /// Remove every checked item. Returns how many were removed.
    pub fn clear_checked(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.checked);
        let removed = before - self.items.len();
        if removed > 0 {
            self.save();
        }
        removed
    }

    /// Reconcile and save after an edit to the item at `index`, tracking where it lands.
    fn settle(&mut self, index: usize) -> usize {
        let new_index = reconciled_index(&self.items, index, self.settings.order);
        self.resort();
        new_index
    }

    fn check_index(&self, index: usize) -> Result<(), ItemError> {
        if index >= self.items.len() {
            return Err(ItemError::IndexOutOfRange(index));
        }
        Ok(())
    }
}

/// Trim item text and fold line breaks into spaces so one item stays one line.
pub fn normalize_text(text: &str) -> String {
    let trimmed = text.trim();
    if !trimmed.contains(['\n', '\r']) {
        return trimmed.to_string();
    }
    trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
