//! Pagination utilities for service layer
//!
//! `PageRequest` is what callers ask for (0-based page, size, optional sort);
//! `Page<T>` is what stores hand back, with the totals needed to walk pages.

use serde::Serialize;

use crate::errors::ServiceError;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// A single sort key: a property name plus a direction.
///
/// Whether the property exists is up to the store that receives it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sort {
    pub property: String,
    pub direction: SortDirection,
}

impl Sort {
    /// Parse `property[,asc|desc]`, direction defaulting to ascending.
    pub fn parse(raw: &str) -> Result<Self, ServiceError> {
        let mut parts = raw.split(',').map(str::trim);
        let property = parts.next().unwrap_or_default();
        if property.is_empty() {
            return Err(ServiceError::Validation("sort property must not be empty".into()));
        }
        let direction = match parts.next() {
            None | Some("") => SortDirection::Asc,
            Some(d) if d.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            Some(d) if d.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            Some(d) => return Err(ServiceError::Validation(format!("invalid sort direction `{d}`"))),
        };
        if parts.next().is_some() {
            return Err(ServiceError::Validation(format!("invalid sort `{raw}`")));
        }
        Ok(Self { property: property.to_string(), direction })
    }
}

/// Pagination parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// 0-based page index
    pub page: u64,
    /// items per page, always within 1..=MAX_PAGE_SIZE
    pub size: u64,
    pub sort: Option<Sort>,
}

impl PageRequest {
    /// Clamp `size` into range; `None` picks the defaults.
    pub fn new(page: Option<u64>, size: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(0),
            size: size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
            sort: None,
        }
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn offset(&self) -> u64 { self.page.saturating_mul(self.size) }
}

impl Default for PageRequest {
    fn default() -> Self { Self::new(None, None) }
}

/// One page of an ordered result set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: u64,
    pub total_pages: u64,
    pub page: u64,
    pub size: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_items: u64, req: &PageRequest) -> Self {
        Self {
            items,
            total_items,
            total_pages: total_items.div_ceil(req.size),
            page: req.page,
            size: req.size,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
            total_pages: self.total_pages,
            page: self.page,
            size: self.size,
        }
    }
}
