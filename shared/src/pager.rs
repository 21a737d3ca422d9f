//! Page arithmetic for the popup list.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PagerError {
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub fn new(size: usize) -> Result<Self, PagerError> {
        NonZeroUsize::new(size).map(Self).ok_or(PagerError::ZeroPageSize)
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(crate::POPUPS_PER_PAGE)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = PagerError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
}

#[must_use]
pub fn total_pages(len: usize, size: PageSize) -> usize {
    len.div_ceil(size.get())
}

/// Slices out one page. An out-of-range index gives an empty page.
pub fn paginate<T>(items: &[T], page_index: usize, size: PageSize) -> Page<'_, T> {
    let total_pages = total_pages(items.len(), size);
    if page_index >= total_pages {
        return Page { items: &[], total_pages };
    }

    let start = page_index * size.get();
    let end = start.saturating_add(size.get()).min(items.len());
    Page {
        items: &items[start..end],
        total_pages,
    }
}

#[must_use]
pub fn advance(page_index: usize, total_pages: usize) -> usize {
    if page_index.saturating_add(1) < total_pages {
        page_index + 1
    } else {
        page_index
    }
}

#[must_use]
pub fn retreat(page_index: usize) -> usize {
    page_index.saturating_sub(1)
}

/// Largest valid index not above `page_index`; 0 when there are no pages.
#[must_use]
pub fn clamp(page_index: usize, total_pages: usize) -> usize {
    page_index.min(total_pages.saturating_sub(1))
}
