use tracing::warn;

use crate::error::{QueryError, Result};

/// A validated page position: both values are at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page_number: u32,
    page_size: u32,
}

impl PageRequest {
    /// Validates a page number and size as received from a caller.
    ///
    /// Values below one, or too large to address, fail with
    /// [`QueryError::InvalidPaginationParams`].
    pub fn new(page_number: i64, page_size: i64) -> Result<Self> {
        match (u32::try_from(page_number), u32::try_from(page_size)) {
            (Ok(number), Ok(size)) if number >= 1 && size >= 1 => Ok(Self {
                page_number: number,
                page_size: size,
            }),
            _ => {
                warn!(page_number, page_size, "rejected pagination parameters");
                Err(QueryError::InvalidPaginationParams {
                    page_number,
                    page_size,
                })
            }
        }
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of items before this page.
    pub fn skip(&self) -> usize {
        (self.page_size as usize).saturating_mul(self.page_number as usize - 1)
    }

    pub fn take(&self) -> usize {
        self.page_size as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: 10,
        }
    }
}
