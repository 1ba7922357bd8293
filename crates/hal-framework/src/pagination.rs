//! # Paginators
//!
//! Windowing strategies for collection envelopes. Each paginator takes the
//! full ordered collection (or, for cursors, the caller's cursors) plus the
//! request URL, and returns the window to render together with the
//! [`PaginationInfo`] that [`wrap`](crate::wrap) needs.
//!
//! The request URL is only rewritten, never generated: next and previous links
//! are the incoming URL with one query parameter replaced or removed.
//!
//! | Strategy | next / previous | templated `page` | count / page_size |
//! |----------|-----------------|------------------|-------------------|
//! | [`PageNumberPagination`] | yes | yes | yes |
//! | [`LimitOffsetPagination`] | yes | yes | yes |
//! | [`CursorPagination`] | yes | no | no |

use crate::config::PaginationConfig;
use crate::envelope::PaginationInfo;
use crate::error::PaginationError;
use crate::query::{remove_query_param, replace_query_param};
use tracing::debug;

/// One window of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub info: PaginationInfo,
}

/// `?page=n` pagination with 1-based page numbers.
///
/// ```rust
/// use hal_framework::PageNumberPagination;
///
/// let items: Vec<u32> = (1..=50).collect();
/// let paginator = PageNumberPagination::new(10);
/// let page = paginator.paginate(&items, 1, "http://x/users").unwrap();
///
/// assert_eq!(page.items, &items[..10]);
/// assert_eq!(page.info.next.as_deref(), Some("http://x/users?page=2"));
/// assert_eq!(page.info.previous, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNumberPagination {
    pub page_size: u64,
    pub page_query_param: String,
}

impl PageNumberPagination {
    pub fn new(page_size: u64) -> Self {
        Self::from_config(&PaginationConfig {
            page_size,
            ..PaginationConfig::default()
        })
    }

    pub fn from_config(config: &PaginationConfig) -> Self {
        Self {
            page_size: config.page_size.min(config.max_page_size),
            page_query_param: config.page_query_param.clone(),
        }
    }

    pub fn paginate<'a, T>(
        &self,
        items: &'a [T],
        page: u64,
        request_url: &str,
    ) -> Result<Page<'a, T>, PaginationError> {
        if self.page_size == 0 {
            return Err(PaginationError::InvalidLimit(0));
        }
        let count = items.len() as u64;
        let num_pages = count.div_ceil(self.page_size).max(1);
        if page == 0 || page > num_pages {
            return Err(PaginationError::InvalidPage { page, num_pages });
        }

        let start = ((page - 1) * self.page_size) as usize;
        let end = (start + self.page_size as usize).min(items.len());

        let next = (page < num_pages)
            .then(|| replace_query_param(request_url, &self.page_query_param, page + 1));
        let previous = (page > 1).then(|| {
            if page == 2 {
                remove_query_param(request_url, &self.page_query_param)
            } else {
                replace_query_param(request_url, &self.page_query_param, page - 1)
            }
        });

        debug!(page, num_pages, count, "Paginated by page number");
        Ok(Page {
            items: &items[start..end],
            info: PaginationInfo::page_number(self.page_query_param.clone())
                .with_next(next)
                .with_previous(previous)
                .with_count(count)
                .with_page_size(self.page_size),
        })
    }
}

impl Default for PageNumberPagination {
    fn default() -> Self {
        Self::from_config(&PaginationConfig::default())
    }
}

/// `?limit=n&offset=m` pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitOffsetPagination {
    pub default_limit: u64,
    pub max_limit: u64,
    pub limit_query_param: String,
    pub offset_query_param: String,
}

impl LimitOffsetPagination {
    pub fn from_config(config: &PaginationConfig) -> Self {
        Self {
            default_limit: config.page_size,
            max_limit: config.max_page_size,
            limit_query_param: config.limit_query_param.clone(),
            offset_query_param: config.offset_query_param.clone(),
        }
    }

    /// Windows `items`. A requested limit above `max_limit` is clamped; an
    /// offset past the end yields an empty window.
    pub fn paginate<'a, T>(
        &self,
        items: &'a [T],
        limit: Option<u64>,
        offset: u64,
        request_url: &str,
    ) -> Result<Page<'a, T>, PaginationError> {
        let limit = limit.unwrap_or(self.default_limit).min(self.max_limit);
        if limit == 0 {
            return Err(PaginationError::InvalidLimit(0));
        }
        let count = items.len() as u64;
        let start = offset.min(count) as usize;
        let end = offset.saturating_add(limit).min(count) as usize;

        let next = (offset.saturating_add(limit) < count).then(|| {
            let url = replace_query_param(request_url, &self.limit_query_param, limit);
            replace_query_param(&url, &self.offset_query_param, offset + limit)
        });
        let previous = (offset > 0).then(|| {
            let url = replace_query_param(request_url, &self.limit_query_param, limit);
            if offset <= limit {
                remove_query_param(&url, &self.offset_query_param)
            } else {
                replace_query_param(&url, &self.offset_query_param, offset - limit)
            }
        });

        debug!(limit, offset, count, "Paginated by limit/offset");
        Ok(Page {
            items: &items[start..end],
            info: PaginationInfo::limit_offset(self.offset_query_param.clone())
                .with_next(next)
                .with_previous(previous)
                .with_count(count)
                .with_page_size(limit),
        })
    }
}

impl Default for LimitOffsetPagination {
    fn default() -> Self {
        Self::from_config(&PaginationConfig::default())
    }
}

/// Opaque-cursor pagination. The caller computes the cursors; the paginator
/// only places them into links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorPagination {
    pub cursor_query_param: String,
}

impl CursorPagination {
    pub fn from_config(config: &PaginationConfig) -> Self {
        Self {
            cursor_query_param: config.cursor_query_param.clone(),
        }
    }

    /// `base_url` is the collection URL without any cursor; it is also the
    /// envelope's self link.
    pub fn paginate(
        &self,
        base_url: &str,
        next_cursor: Option<&str>,
        previous_cursor: Option<&str>,
    ) -> PaginationInfo {
        let link = |cursor: &str| replace_query_param(base_url, &self.cursor_query_param, cursor);
        PaginationInfo::cursor()
            .with_next(next_cursor.map(link))
            .with_previous(previous_cursor.map(link))
    }
}

impl Default for CursorPagination {
    fn default() -> Self {
        Self::from_config(&PaginationConfig::default())
    }
}
