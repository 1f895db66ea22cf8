use pd_core::{Profile, SearchSummary, filter_profiles};

/// Profiles matching the current query, borrowed from the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredView<'a> {
    pub profiles: Vec<&'a Profile>,
    pub summary: SearchSummary,
}

/// Name search over the profile collection. Recomputed on every read.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    query: String,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    pub fn view<'a>(&self, profiles: &'a [Profile]) -> FilteredView<'a> {
        let matched = filter_profiles(profiles, &self.query);
        let summary = SearchSummary::new(&self.query, matched.len());
        FilteredView {
            profiles: matched,
            summary,
        }
    }

    /// The "add profile" entry point is hidden while any query is typed
    pub fn create_affordance_visible(&self) -> bool {
        self.query.is_empty()
    }
}
