use crate::domain::errors::{DomainError, DomainResult};

/// Articles shown per listing page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 3;

/// 1-based page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageNumber(u32);

impl PageNumber {
    pub const FIRST: Self = Self(1);

    pub fn new(value: u32) -> DomainResult<Self> {
        if value == 0 {
            return Err(DomainError::Validation("page number must be positive".into()));
        }
        Ok(Self(value))
    }

    /// Lenient parse of a `page` query parameter: anything absent, non-numeric,
    /// out of range or below one falls back to the first page.
    pub fn parse_or_first(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<i64>().ok())
            .and_then(|value| u32::try_from(value).ok())
            .and_then(|value| Self::new(value).ok())
            .unwrap_or(Self::FIRST)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Number of records to skip before this page starts.
    pub fn offset(self, size: PageSize) -> u64 {
        u64::from(self.0 - 1) * u64::from(size.get())
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u32);

impl PageSize {
    pub fn new(value: u32) -> DomainResult<Self> {
        if value == 0 {
            return Err(DomainError::Validation("page size must be positive".into()));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

/// Pagination metadata attached to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    pub page_number: PageNumber,
    pub page_size: PageSize,
    pub total_count: u64,
    pub page_count: u64,
}

impl PageDescriptor {
    pub fn new(page_number: PageNumber, page_size: PageSize, total_count: u64) -> Self {
        Self {
            page_number,
            page_size,
            total_count,
            page_count: total_count.div_ceil(u64::from(page_size.get())),
        }
    }

    pub fn is_past_end(&self) -> bool {
        u64::from(self.page_number.get()) > self.page_count
    }
}
