//! Name search over a profile collection.

use crate::Profile;

/// An empty or whitespace-only query filters nothing.
pub fn is_identity_query(query: &str) -> bool {
    query.trim().is_empty()
}

/// Profiles whose name contains `query`, compared case-insensitively, in
/// collection order.
///
/// The query is matched as typed (not trimmed); only the identity check
/// ignores surrounding whitespace.
pub fn filter_profiles<'a>(profiles: &'a [Profile], query: &str) -> Vec<&'a Profile> {
    if is_identity_query(query) {
        return profiles.iter().collect();
    }

    let lowered = query.to_lowercase();
    profiles
        .iter()
        .filter(|profile| profile.name_contains(&lowered))
        .collect()
}

/// Result line shown under the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchSummary {
    Unfiltered,
    NoMatches { query: String },
    Matches { count: usize },
}

impl SearchSummary {
    pub fn new(query: &str, count: usize) -> Self {
        if query.is_empty() {
            Self::Unfiltered
        } else if count == 0 {
            Self::NoMatches {
                query: query.to_string(),
            }
        } else {
            Self::Matches { count }
        }
    }

    pub fn describe(&self) -> Option<String> {
        match self {
            Self::Unfiltered => None,
            Self::NoMatches { query } => Some(format!("No profiles found matching \"{query}\"")),
            Self::Matches { count: 1 } => Some(String::from("Found 1 profile")),
            Self::Matches { count } => Some(format!("Found {count} profiles")),
        }
    }
}
