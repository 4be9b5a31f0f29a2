use std::fmt;

const QUERY_KEY: &str = "query";
const PAGE_KEY: &str = "page";

/// Decoded `key=value` pairs of a URL query string, in order of appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    /// Parse an `application/x-www-form-urlencoded` query string.
    /// A leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        SearchParams { pairs }
    }

    /// First value for `key`, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace every value for `key` with a single `value`, or append it
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.remove(key);
        self.pairs.push((key.to_string(), value.into()));
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish();
        f.write_str(&encoded)
    }
}

/// The `(query, page)` pair that decides which invoices are shown
///
/// Always derived from the URL; `page` is 1-based and never zero. The fields
/// are private so every constructor goes through that clamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterState {
    query: String,
    page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            query: String::new(),
            page: 1,
        }
    }
}

impl FilterState {
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        FilterState {
            query: query.into(),
            page: page.max(1),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Derive the filter from the URL's search parameters.
    ///
    /// `query` is taken verbatim. `page` falls back to 1 when it is missing,
    /// empty, not an integer, or below 1. There is no upper bound here; the
    /// data source decides what a page past the end means.
    pub fn from_search_params(params: &SearchParams) -> Self {
        let query = params.get(QUERY_KEY).unwrap_or_default().to_string();
        let page = params.get(PAGE_KEY).map_or(1, parse_page);
        FilterState { query, page }
    }

    /// Same filter on a different page
    pub fn with_page(&self, page: u32) -> Self {
        FilterState::new(self.query.clone(), page)
    }

    /// Search parameters that navigate back to this filter.
    /// An empty query is left out of the URL.
    pub fn to_search_params(&self) -> SearchParams {
        let mut params = SearchParams::default();
        if !self.query.is_empty() {
            params.set(QUERY_KEY, self.query.clone());
        }
        params.set(PAGE_KEY, self.page.to_string());
        params
    }
}

fn parse_page(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(page) if page >= 1 => page,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_for(query: &str) -> FilterState {
        FilterState::from_search_params(&SearchParams::parse(query))
    }

    #[test]
    fn test_no_params_defaults() {
        assert_eq!(filter_for(""), FilterState::new("", 1));
        assert_eq!(filter_for("?"), FilterState::new("", 1));
    }

    #[test]
    fn test_missing_page_defaults_to_first() {
        assert_eq!(filter_for("query=acme"), FilterState::new("acme", 1));
    }

    #[test]
    fn test_invalid_page_defaults_to_first() {
        for raw in ["page=", "page=abc", "page=0", "page=-3", "page=2.5", "page=99999999999"] {
            assert_eq!(filter_for(raw).page, 1, "input {raw:?}");
        }
    }

    #[test]
    fn test_numeric_page_is_kept() {
        for n in [1u32, 2, 17, 4000] {
            assert_eq!(filter_for(&format!("page={n}")).page, n);
        }
        assert_eq!(filter_for("page=%203%20").page, 3);
    }

    #[test]
    fn test_query_is_verbatim() {
        let filter = filter_for("?query=Acme+Corp%20%26%20Co&page=2");
        assert_eq!(filter.query, "Acme Corp & Co");
        assert_eq!(filter.page, 2);
    }

    #[test]
    fn test_first_repeated_key_wins() {
        let filter = filter_for("query=first&query=second&page=4&page=9");
        assert_eq!(filter, FilterState::new("first", 4));
    }

    #[test]
    fn test_filter_formats_back_to_params() {
        let filter = FilterState::new("lee robinson", 3);
        let params = filter.to_search_params();
        assert_eq!(params.to_string(), "query=lee+robinson&page=3");
        assert_eq!(FilterState::from_search_params(&params), filter);

        let empty = FilterState::default().to_search_params();
        assert_eq!(empty.to_string(), "page=1");
    }

    #[test]
    fn test_new_clamps_page_zero() {
        let filter = FilterState::new("acme", 0);
        assert_eq!(filter.page(), 1);
        assert_eq!(filter.query(), "acme");
        assert_eq!(FilterState::default().with_page(0).page(), 1);
    }

    #[test]
    fn test_set_replaces_existing_values() {
        let mut params = SearchParams::parse("page=2&query=a&page=5");
        params.set("page", "1");
        assert_eq!(params.get("page"), Some("1"));
        assert_eq!(params.to_string(), "query=a&page=1");
    }
}
