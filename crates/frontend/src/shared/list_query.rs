//! Composition of outbound list queries from list screen state.
//!
//! Every composed query is stamped with the locale active at composition time,
//! which is what keeps locale-dependent fields (titles, categories) in the
//! displayed language.

use std::collections::BTreeMap;

use contracts::enums::Locale;

/// Filter value meaning "no filter applied"
pub const ALL_SENTINEL: &str = "all";

/// Which endpoint variant a query targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryMode {
    List,
    Search,
}

impl QueryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryMode::List => "list",
            QueryMode::Search => "search",
        }
    }
}

/// Value of a single filter control
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FilterValue {
    #[default]
    All,
    Value(String),
}

impl FilterValue {
    /// `"all"` and blank strings are the sentinel
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_SENTINEL) {
            FilterValue::All
        } else {
            FilterValue::Value(trimmed.to_string())
        }
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            FilterValue::All => None,
            FilterValue::Value(v) => Some(v.as_str()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }

    /// Value for a `<select>` control
    pub fn to_control_value(&self) -> String {
        self.as_value().unwrap_or(ALL_SENTINEL).to_string()
    }
}

impl From<&str> for FilterValue {
    fn from(raw: &str) -> Self {
        FilterValue::parse(raw)
    }
}

impl From<String> for FilterValue {
    fn from(raw: String) -> Self {
        FilterValue::parse(&raw)
    }
}

/// Mutable query-shaping state owned by a list screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQueryState {
    pub page: u32,
    pub page_size: u32,
    pub keyword: String,
    pub filters: BTreeMap<String, FilterValue>,
    pub sort: Option<String>,
}

impl ListQueryState {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            keyword: String::new(),
            filters: BTreeMap::new(),
            sort: None,
        }
    }

    pub fn with_filter(mut self, name: &str, value: impl Into<FilterValue>) -> Self {
        self.filters.insert(name.to_string(), value.into());
        self
    }

    pub fn with_sort(mut self, sort: &str) -> Self {
        self.sort = Some(sort.to_string());
        self
    }

    pub fn filter(&self, name: &str) -> FilterValue {
        self.filters.get(name).cloned().unwrap_or_default()
    }

    /// Number of applied filters, keyword included
    pub fn active_filter_count(&self) -> usize {
        let keyword = usize::from(!self.keyword.trim().is_empty());
        keyword + self.filters.values().filter(|v| !v.is_all()).count()
    }
}

/// Immutable query handed to a list fetcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub mode: QueryMode,
    pub page: u32,
    pub page_size: u32,
    pub keyword: Option<String>,
    pub filters: BTreeMap<String, String>,
    pub sort: Option<String>,
    pub locale: Locale,
}

/// Build a query from screen state and the current locale.
///
/// Sentinel filters are dropped rather than sent. A blank keyword selects
/// [`QueryMode::List`].
pub fn compose(state: &ListQueryState, locale: Locale) -> ListQuery {
    let keyword = Some(state.keyword.trim())
        .filter(|k| !k.is_empty())
        .map(str::to_string);
    let mode = if keyword.is_some() {
        QueryMode::Search
    } else {
        QueryMode::List
    };

    let filters = state
        .filters
        .iter()
        .filter_map(|(name, value)| value.as_value().map(|v| (name.clone(), v.to_string())))
        .collect();

    let sort = state
        .sort
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    ListQuery {
        mode,
        page: state.page.max(1),
        page_size: state.page_size.max(1),
        keyword,
        filters,
        sort,
        locale,
    }
}

impl ListQuery {
    /// Outgoing request parameters. `page`, `page_size` and `lang` are always
    /// present and take precedence over a filter with the same name.
    pub fn params(&self) -> BTreeMap<String, String> {
        let mut params = self.filters.clone();
        if let Some(keyword) = &self.keyword {
            params.insert("keyword".to_string(), keyword.clone());
        }
        if let Some(sort) = &self.sort {
            params.insert("sort_by".to_string(), sort.clone());
        }
        params.insert("page".to_string(), self.page.to_string());
        params.insert("page_size".to_string(), self.page_size.to_string());
        params.insert("lang".to_string(), self.locale.code().to_string());
        params
    }

    pub fn to_query_string(&self) -> Result<String, serde_qs::Error> {
        serde_qs::to_string(&self.params())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_state() -> ListQueryState {
        ListQueryState::new(10)
    }

    #[test]
    fn test_sentinel_filters_are_omitted() {
        let state = base_state()
            .with_filter("status", "all")
            .with_filter("role", "admin");
        let query = compose(&state, Locale::En);
        let params = query.params();

        assert!(!params.contains_key("status"));
        assert_eq!(params.get("role").map(String::as_str), Some("admin"));
        assert_eq!(query.filters.len(), 1);
    }

    #[test]
    fn test_blank_filter_counts_as_sentinel() {
        assert_eq!(FilterValue::parse("  "), FilterValue::All);
        assert_eq!(FilterValue::parse("ALL"), FilterValue::All);
        assert_eq!(FilterValue::parse(" active "), FilterValue::Value("active".into()));
    }

    #[test]
    fn test_keyword_selects_mode() {
        let mut state = base_state();
        assert_eq!(compose(&state, Locale::Ar).mode, QueryMode::List);

        state.keyword = "   ".to_string();
        let query = compose(&state, Locale::Ar);
        assert_eq!(query.mode, QueryMode::List);
        assert_eq!(query.keyword, None);

        state.keyword = " water ".to_string();
        let query = compose(&state, Locale::Ar);
        assert_eq!(query.mode, QueryMode::Search);
        assert_eq!(query.keyword.as_deref(), Some("water"));
    }

    #[test]
    fn test_locale_is_stamped() {
        let state = base_state();
        assert_eq!(compose(&state, Locale::Fr).locale, Locale::Fr);
        assert_eq!(
            compose(&state, Locale::Ru).params().get("lang").map(String::as_str),
            Some("ru")
        );
    }

    #[test]
    fn test_composition_is_idempotent() {
        let state = base_state()
            .with_filter("status", "active")
            .with_filter("campaign_id", "12")
            .with_sort("newest");
        let a = compose(&state, Locale::Es);
        let b = compose(&state, Locale::Es);
        assert_eq!(a, b);
        assert_eq!(a.to_query_string().unwrap(), b.to_query_string().unwrap());
    }

    #[test]
    fn test_required_params_always_present() {
        let mut state = base_state();
        state.page = 0;
        state.page_size = 0;
        let params = compose(&state, Locale::En).params();
        assert_eq!(params.get("page").map(String::as_str), Some("1"));
        assert_eq!(params.get("page_size").map(String::as_str), Some("1"));
        assert_eq!(params.get("lang").map(String::as_str), Some("en"));
    }

    #[test]
    fn test_reserved_params_win_over_filters() {
        let state = base_state().with_filter("lang", "fr");
        let params = compose(&state, Locale::Ar).params();
        assert_eq!(params.get("lang").map(String::as_str), Some("ar"));
    }

    #[test]
    fn test_query_string_encodes_keyword() {
        let mut state = base_state().with_sort("most_raised");
        state.keyword = "clean water".to_string();
        let qs = compose(&state, Locale::En).to_query_string().unwrap();
        assert!(qs.contains("page=1"));
        assert!(qs.contains("page_size=10"));
        assert!(qs.contains("lang=en"));
        assert!(qs.contains("sort_by=most_raised"));
        assert!(qs.contains("keyword=clean"));
        assert!(!qs.contains("clean water"));
    }

    #[test]
    fn test_active_filter_count() {
        let mut state = base_state()
            .with_filter("status", "all")
            .with_filter("role", "user");
        assert_eq!(state.active_filter_count(), 1);
        state.keyword = "sam".to_string();
        assert_eq!(state.active_filter_count(), 2);
    }
}
