//! Pagination types

use serde::{Deserialize, Serialize};

/// Page selector, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// Offset of the first item, treating page 0 as page 1
    pub fn offset(&self) -> usize {
        self.page.max(1).saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Same request with the page size clamped to `max`
    pub fn clamped(self, max: usize) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, max.max(1)),
        }
    }
}

/// One page of a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Size of the whole collection, not just this page
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    /// Slice `all` according to `request`
    pub fn from_slice(all: &[T], request: PageRequest) -> Self
    where
        T: Clone,
    {
        let items = all
            .iter()
            .skip(request.offset())
            .take(request.page_size)
            .cloned()
            .collect();

        Self {
            items,
            total: all.len(),
            page: request.page.max(1),
            page_size: request.page_size,
        }
    }

    /// Number of pages needed to hold `total` items
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }
}
