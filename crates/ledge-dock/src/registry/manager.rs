use super::AppEntry;
use crate::error::{DockError, DockResult};

/// Ordered collection of pinned applications
///
/// Entries keep their insertion order; the registry never reorders them.
/// Every operation is atomic from the caller's view.
#[derive(Debug, Default)]
pub struct AppRegistry {
    entries: Vec<AppEntry>,
}

impl AppRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry, returning its index
    ///
    /// Rejects the candidate when any pinned entry shares its bundle
    /// identifier or launch target. Rejection is a report, not a fault;
    /// the registry is unchanged.
    pub fn add(&mut self, entry: AppEntry) -> DockResult<usize> {
        if self.entries.iter().any(|e| e.collides_with(&entry)) {
            return Err(DockError::DuplicateEntry {
                bundle_id: entry.bundle_id,
            });
        }

        self.entries.push(entry);
        Ok(self.entries.len() - 1)
    }

    /// Remove the first entry with the given bundle identifier
    ///
    /// Returns the removed entry's former index so the presentation layer
    /// can animate the right slot. Remaining entries keep their relative
    /// order.
    pub fn remove(&mut self, bundle_id: &str) -> DockResult<usize> {
        match self.entries.iter().position(|e| e.bundle_id == bundle_id) {
            Some(index) => {
                self.entries.remove(index);
                Ok(index)
            }
            None => Err(DockError::EntryNotFound {
                bundle_id: bundle_id.to_string(),
            }),
        }
    }

    /// Remove all entries unconditionally
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of pinned entries
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[AppEntry] {
        &self.entries
    }

    /// Look up an entry by bundle identifier
    pub fn get(&self, bundle_id: &str) -> Option<&AppEntry> {
        self.entries.iter().find(|e| e.bundle_id == bundle_id)
    }

    /// Whether an entry with the given identifier is pinned
    pub fn contains(&self, bundle_id: &str) -> bool {
        self.get(bundle_id).is_some()
    }
}
