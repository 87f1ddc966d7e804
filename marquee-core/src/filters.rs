use crate::validator::{Validator, permitted};

/// List-query filtering, sorting, and pagination, built per request.
///
/// `sort` holds the raw query value, including any leading `-`; it is only
/// ever interpolated into SQL after [`validate_filters`] has checked it
/// against the endpoint's safelist.
#[derive(Debug, Clone)]
pub struct Filters {
    pub page: i64,
    pub page_size: i64,
    pub sort: String,
    pub sort_safelist: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

impl Filters {
    /// The sort column with a single leading `-` stripped.
    pub fn sort_column(&self) -> &str {
        self.sort.strip_prefix('-').unwrap_or(&self.sort)
    }

    pub fn sort_direction(&self) -> SortDirection {
        if self.sort.starts_with('-') {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }
}

pub fn validate_filters(v: &mut Validator, filters: &Filters) {
    v.check(filters.page > 0, "page", "must be greater than zero");
    // Cap the page to keep the computed OFFSET sane.
    v.check(
        filters.page <= 10_000_000,
        "page",
        "must be a maximum of 10 million",
    );
    v.check(filters.page_size > 0, "page_size", "must be greater than zero");
    v.check(
        filters.page_size <= 100,
        "page_size",
        "must be a maximum of 100",
    );
    v.check(
        permitted(&filters.sort, filters.sort_safelist),
        "sort",
        "invalid sort value",
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAFELIST: &[&str] = &["id", "title", "year", "-id", "-title", "-year"];

    fn filters(page: i64, page_size: i64, sort: &str) -> Filters {
        Filters {
            page,
            page_size,
            sort: sort.to_string(),
            sort_safelist: SAFELIST,
        }
    }

    #[test]
    fn derives_sort_column_and_direction() {
        let ascending = filters(1, 20, "year");
        assert_eq!(ascending.sort_column(), "year");
        assert_eq!(ascending.sort_direction(), SortDirection::Ascending);

        let descending = filters(1, 20, "-year");
        assert_eq!(descending.sort_column(), "year");
        assert_eq!(descending.sort_direction(), SortDirection::Descending);
    }

    #[test]
    fn computes_limit_and_offset() {
        let f = filters(3, 5, "id");
        assert_eq!(f.limit(), 5);
        assert_eq!(f.offset(), 10);

        let first_page = filters(1, 20, "id");
        assert_eq!(first_page.offset(), 0);
    }

    #[test]
    fn accepts_in_range_filters() {
        let mut v = Validator::new();
        validate_filters(&mut v, &filters(1, 20, "id"));
        assert!(v.is_valid());
    }

    #[test]
    fn rejects_out_of_range_pages() {
        for (page, page_size) in [(0, 20), (-1, 20), (10_000_001, 20)] {
            let mut v = Validator::new();
            validate_filters(&mut v, &filters(page, page_size, "id"));
            assert!(!v.is_valid());
            assert!(v.errors().contains_key("page"), "page={page}");
        }
    }

    #[test]
    fn rejects_out_of_range_page_sizes() {
        for page_size in [0, -5, 101] {
            let mut v = Validator::new();
            validate_filters(&mut v, &filters(1, page_size, "id"));
            assert!(!v.is_valid());
            assert!(v.errors().contains_key("page_size"), "page_size={page_size}");
        }
    }

    #[test]
    fn rejects_sort_values_outside_the_safelist() {
        for sort in ["rating", "-rating", "id; DROP TABLE movies", "--id"] {
            let mut v = Validator::new();
            validate_filters(&mut v, &filters(1, 20, sort));
            assert!(!v.is_valid());
            assert_eq!(
                v.errors().get("sort").map(String::as_str),
                Some("invalid sort value"),
                "sort={sort}"
            );
        }
    }
}
