//! Pagination bounds for vehicle listings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vehicle::VehicleEntry;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_PAGE: u32 = 100;
pub const MAX_LIMIT: u32 = 50;

/// Rejected pagination parameters. The display text is sent to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("Page too high")]
    PageTooHigh,
    #[error("Limit too high")]
    LimitTooHigh,
    #[error("Invalid page")]
    InvalidPage,
    #[error("Invalid limit")]
    InvalidLimit,
}

/// A 1-based page request that has passed the bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Check numeric bounds. The page check runs first, so a request that
    /// breaks both limits reports only the page.
    pub fn new(page: u32, limit: u32) -> Result<Self, PageError> {
        if page == 0 {
            return Err(PageError::InvalidPage);
        }
        if page > MAX_PAGE {
            return Err(PageError::PageTooHigh);
        }
        if limit == 0 {
            return Err(PageError::InvalidLimit);
        }
        if limit > MAX_LIMIT {
            return Err(PageError::LimitTooHigh);
        }
        Ok(Self { page, limit })
    }

    /// Parse raw query-string values, falling back to the defaults when a
    /// parameter is absent or empty.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Result<Self, PageError> {
        let page = parse_param(page, DEFAULT_PAGE, PageError::InvalidPage)?;
        let limit = parse_param(limit, DEFAULT_LIMIT, PageError::InvalidLimit)?;
        Self::new(page, limit)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Index of the first entry on this page.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.limit as usize
    }
}

// Values too large for u32 are still "too high", not malformed.
fn parse_param(raw: Option<&str>, default: u32, invalid: PageError) -> Result<u32, PageError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(default),
        Some(raw) => raw,
    };
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid);
    }
    Ok(raw.parse::<u32>().unwrap_or(u32::MAX))
}

/// One page of the collection, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub vehicles: Vec<VehicleEntry>,
    pub page: u32,
    pub limit: u32,
}
