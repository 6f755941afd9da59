use std::ops::Deref;

use tracing::debug;

use super::metadata::PaginationMetadata;
use super::request::PageRequest;

/// An ordered collection that can report its size and hand out one slice of
/// itself.
pub trait PageSource {
    type Item;

    /// Number of items in the whole source.
    fn total_count(&self) -> usize;

    /// Skips `skip` items and returns at most `take` of the rest, in order.
    fn take_page(self, skip: usize, take: usize) -> Vec<Self::Item>;
}

impl<T> PageSource for Vec<T> {
    type Item = T;

    fn total_count(&self) -> usize {
        self.len()
    }

    fn take_page(self, skip: usize, take: usize) -> Vec<T> {
        self.into_iter().skip(skip).take(take).collect()
    }
}

impl<T: Clone> PageSource for &[T] {
    type Item = T;

    fn total_count(&self) -> usize {
        self.len()
    }

    fn take_page(self, skip: usize, take: usize) -> Vec<T> {
        self.iter().skip(skip).take(take).cloned().collect()
    }
}

/// One page of an ordered source plus the counts needed to navigate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedList<T> {
    items: Vec<T>,
    total_count: usize,
    page_size: u32,
    current_page: u32,
    total_pages: usize,
}

impl<T> PagedList<T> {
    /// Counts the full source, then takes the requested page from it.
    ///
    /// A page past the end is empty but still reports the source totals.
    pub fn create<S>(source: S, request: PageRequest) -> Self
    where
        S: PageSource<Item = T>,
    {
        let total_count = source.total_count();
        let items = source.take_page(request.skip(), request.take());
        let total_pages = total_count.div_ceil(request.take());

        debug!(
            total_count,
            page = request.page_number(),
            page_size = request.page_size(),
            returned = items.len(),
            "paged source"
        );

        Self {
            items,
            total_count,
            page_size: request.page_size(),
            current_page: request.page_number(),
            total_pages,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        (self.current_page as usize) < self.total_pages
    }

    /// Applies `f` to every item, keeping the page counts.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedList<U> {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_size: self.page_size,
            current_page: self.current_page,
            total_pages: self.total_pages,
        }
    }

    /// Page counts without links.
    pub fn metadata(&self) -> PaginationMetadata {
        PaginationMetadata {
            total_count: self.total_count,
            page_size: self.page_size,
            current_page: self.current_page,
            total_pages: self.total_pages,
            previous_page_link: None,
            next_page_link: None,
        }
    }
}

impl<T> Deref for PagedList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for PagedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PagedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
