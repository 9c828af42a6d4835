//! Search query carried in the `q` route parameter.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::catalog::{self, GameEntry};

/// Query parameter name used by the header search form.
pub const QUERY_PARAM: &str = "q";

/// Normalized search term. Blank input is treated as no search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    term: Option<String>,
}

impl SearchQuery {
    pub fn from_param(raw: Option<&str>) -> Self {
        let term = raw.map(str::trim).filter(|t| !t.is_empty()).map(str::to_owned);
        Self { term }
    }

    pub fn is_active(&self) -> bool {
        self.term.is_some()
    }

    pub fn term(&self) -> &str {
        self.term.as_deref().unwrap_or_default()
    }

    pub fn results(&self) -> Vec<&'static GameEntry> {
        catalog::search(self.term())
    }
}
