use std::{collections::HashSet, fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Shared id carried by both halves of a pair. Matching is decided purely by
/// id equality, never by label content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairId(pub u32);

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable catalog entry: one left/right label pair under a shared id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairItem {
    pub id: PairId,
    pub left_label: String,
    pub right_label: String,
}

impl PairItem {
    pub fn new(id: u32, left_label: impl Into<String>, right_label: impl Into<String>) -> Self {
        Self {
            id: PairId(id),
            left_label: left_label.into(),
            right_label: right_label.into(),
        }
    }
}

/// Validated set of pair items. Ids are unique; entries are never mutated or
/// removed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<PairItem>,
}

impl Catalog {
    pub fn new(items: Vec<PairItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        Ok(Self { items })
    }

    /// The built-in five-senses pair set used when no catalog file is given.
    pub fn five_senses() -> Self {
        Self {
            items: vec![
                PairItem::new(1, "hand", "touch"),
                PairItem::new(2, "nose", "smell"),
                PairItem::new(3, "tongue", "taste"),
                PairItem::new(4, "ear", "hear"),
                PairItem::new(5, "eyes", "see"),
            ],
        }
    }

    /// Loads and validates a catalog from a JSON array of pair items.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path)?;
        let items: Vec<PairItem> = serde_json::from_str(&text)?;
        Self::new(items)
    }

    pub fn items(&self) -> &[PairItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: PairId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn get(&self, id: PairId) -> Option<&PairItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::five_senses()
    }
}
