use std::collections::HashMap;

use marquee_core::Validator;

/// Parsed query-string mapping; the last value wins for repeated keys.
pub type QueryParams = HashMap<String, String>;

pub fn parse_query(query: Option<&str>) -> QueryParams {
    match query {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect(),
        None => QueryParams::new(),
    }
}

/// Read a string value; empty or absent falls back to `default`.
pub fn read_string(params: &QueryParams, key: &str, default: &str) -> String {
    match params.get(key) {
        Some(value) if !value.is_empty() => value.clone(),
        _ => default.to_string(),
    }
}

/// Read a comma-separated list; no trimming, no empty-entry filtering.
pub fn read_csv(params: &QueryParams, key: &str, default: Vec<String>) -> Vec<String> {
    match params.get(key) {
        Some(value) if !value.is_empty() => value.split(',').map(str::to_string).collect(),
        _ => default,
    }
}

/// Read an integer value. Non-integer text records an error on the key in
/// `v` and falls back to `default` rather than aborting the request.
pub fn read_int(params: &QueryParams, key: &str, default: i64, v: &mut Validator) -> i64 {
    let value = match params.get(key) {
        Some(value) if !value.is_empty() => value,
        _ => return default,
    };

    match value.parse() {
        Ok(n) => n,
        Err(_) => {
            v.add_error(key, "must be an integer");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_decodes_pairs() {
        let params = parse_query(Some("title=the%20godfather&page=2"));
        assert_eq!(params.get("title").map(String::as_str), Some("the godfather"));
        assert_eq!(params.get("page").map(String::as_str), Some("2"));
    }

    #[test]
    fn last_value_wins_for_repeated_keys() {
        let params = parse_query(Some("sort=id&sort=-year"));
        assert_eq!(params.get("sort").map(String::as_str), Some("-year"));
    }

    #[test]
    fn read_string_falls_back_when_empty_or_absent() {
        let params = parse_query(Some("sort="));
        assert_eq!(read_string(&params, "sort", "id"), "id");
        assert_eq!(read_string(&params, "missing", "id"), "id");

        let params = parse_query(Some("sort=-year"));
        assert_eq!(read_string(&params, "sort", "id"), "-year");
    }

    #[test]
    fn read_csv_splits_without_trimming_or_filtering() {
        let params = parse_query(Some("genres=drama,%20action,,sci-fi"));
        assert_eq!(
            read_csv(&params, "genres", Vec::new()),
            vec![
                "drama".to_string(),
                " action".to_string(),
                String::new(),
                "sci-fi".to_string(),
            ]
        );
    }

    #[test]
    fn read_csv_falls_back_when_absent() {
        let params = parse_query(None);
        assert!(read_csv(&params, "genres", Vec::new()).is_empty());
    }

    #[test]
    fn read_int_parses_or_defaults() {
        let mut v = Validator::new();
        let params = parse_query(Some("page=7"));
        assert_eq!(read_int(&params, "page", 1, &mut v), 7);
        assert_eq!(read_int(&params, "page_size", 20, &mut v), 20);
        assert!(v.is_valid());
    }

    #[test]
    fn read_int_records_error_and_returns_default() {
        let mut v = Validator::new();
        let params = parse_query(Some("page=abc"));
        assert_eq!(read_int(&params, "page", 1, &mut v), 1);
        assert_eq!(
            v.errors().get("page").map(String::as_str),
            Some("must be an integer")
        );
    }
}
