//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// One page of a paginated list endpoint
///
/// Mirrors the wire shape the JobDesk API uses for paginated responses
/// (a serialized Spring Data `Page`): the items live under `content` and
/// the page metadata sits alongside in camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The actual data items
    pub content: Vec<T>,

    /// Current page number (0-indexed)
    pub number: u32,

    /// Items per page
    pub size: u32,

    /// Total number of items across all pages
    pub total_elements: u64,

    /// Total number of pages
    pub total_pages: u32,

    /// Whether this is the first page
    #[serde(default)]
    pub first: bool,

    /// Whether this is the last page
    #[serde(default)]
    pub last: bool,
}

impl<T> Page<T> {
    /// Create an empty first page
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            number: 0,
            size: 0,
            total_elements: 0,
            total_pages: 0,
            first: true,
            last: true,
        }
    }

    /// Check if the page has no items
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get the number of items in this page
    pub fn count(&self) -> usize {
        self.content.len()
    }

    /// Whether a following page exists
    pub fn has_next(&self) -> bool {
        !self.last
    }

    /// Transform the data items using a function
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            first: self.first,
            last: self.last,
        }
    }
}
