use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Page requested by the caller, exactly as received.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParameter {
    pub current_page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageParameter {
    pub fn new(current_page: Option<u32>, page_size: Option<u32>) -> Self {
        Self {
            current_page,
            page_size,
        }
    }

    /// Resolves missing or zero values to the defaults, returning
    /// `(current_page, page_size)`.
    pub fn resolve(&self) -> (u32, u32) {
        let current_page = self
            .current_page
            .filter(|page| *page > 0)
            .unwrap_or(DEFAULT_CURRENT_PAGE);
        let page_size = self
            .page_size
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        (current_page, page_size)
    }
}

/// Page metadata attached to every [`Pager`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: u32,
    pub page_size: u32,
    pub total_page: u64,
    pub offset: u64,
}

/// One page of items plus the size of the whole filtered collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pager<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: PageInfo,
}

impl<T> Pager<T> {
    pub fn new(items: Vec<T>, total_count: u64, current_page: u32, page_size: u32) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };

        Self {
            items,
            total_count,
            page: PageInfo {
                current_page,
                page_size,
                total_page: total_count.div_ceil(u64::from(page_size)),
                offset: offset(current_page, page_size),
            },
        }
    }
}

/// Number of rows preceding `current_page`.
pub fn offset(current_page: u32, page_size: u32) -> u64 {
    u64::from(current_page.saturating_sub(1)) * u64::from(page_size)
}
