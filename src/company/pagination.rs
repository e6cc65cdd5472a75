//! Page window calculation for company listings.
//!
//! Pages are 1-based: page `i` of size `s` covers `[(i - 1) * s, i * s)`.
//! Out-of-range windows are clamped to whatever remains, never rejected.
//!
//! - `(0, 0)` (or both absent) selects the whole collection.
//! - Any other combination with a non-positive value selects nothing.
//!
//! An empty query value (`?pageIndex=`) counts as absent.

use serde::{Deserialize, Deserializer};
use std::ops::Range;

/// Query parameters accepted by `GET /api/companies`.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page_index: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page_size: Option<i64>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl PageQuery {
    pub fn new(page_index: i64, page_size: i64) -> Self {
        Self {
            page_index: Some(page_index),
            page_size: Some(page_size),
        }
    }

    /// True when neither parameter was supplied.
    pub fn is_unpaged(&self) -> bool {
        self.page_index.is_none() && self.page_size.is_none()
    }
}

/// Resolves a page request against a collection of `len` items.
///
/// Returns the index range to slice, always within `0..=len` and never
/// longer than `page_size`.
pub fn page_range(page_index: i64, page_size: i64, len: usize) -> Range<usize> {
    if page_index == 0 && page_size == 0 {
        return 0..len;
    }
    if page_index <= 0 || page_size <= 0 {
        return 0..0;
    }

    let size = usize::try_from(page_size).unwrap_or(usize::MAX);
    let pages_before = usize::try_from(page_index - 1).unwrap_or(usize::MAX);

    let start = pages_before.saturating_mul(size).min(len);
    let end = start.saturating_add(size).min(len);
    start..end
}
