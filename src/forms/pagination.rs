pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const FIRST_PAGE: i64 = 1;

/// Raw `?page=&size=` query. Kept as strings so garbage never fails the request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PaginationQuery {
    pub page: Option<String>,
    pub size: Option<String>,
}

impl PaginationQuery {
    /// Picks `page` and `size` out of decoded query pairs. The first
    /// occurrence of a key wins, repeats and unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" if query.page.is_none() => query.page = Some(value),
                "size" if query.size.is_none() => query.size = Some(value),
                _ => {}
            }
        }
        query
    }
}

/// Normalized 1-based offset pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    size: i64,
}

impl Pagination {
    /// Non-positive or missing values fall back to page 1 / size 10.
    pub fn new(page: Option<i64>, size: Option<i64>) -> Self {
        Self {
            page: page.filter(|page| *page > 0).unwrap_or(FIRST_PAGE),
            size: size.filter(|size| *size > 0).unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    pub fn limit(&self) -> i64 {
        self.size
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.size)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl From<PaginationQuery> for Pagination {
    fn from(query: PaginationQuery) -> Self {
        Self::new(parse_number(query.page), parse_number(query.size))
    }
}

fn parse_number(raw: Option<String>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
}
