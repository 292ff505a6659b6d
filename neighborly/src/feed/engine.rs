//! The feed filter/search engine.

use super::models::Filter;
use crate::catalog::HelpRequest;

/// Compute the visible subset of `requests` for a search term and filter.
///
/// Order is preserved: the result is `requests` with non-matching entries
/// removed. A non-empty `search_term` requires a case-insensitive substring
/// match against the title or the description; each populated filter field
/// requires exact equality. An empty term and an empty filter return the
/// input unchanged.
pub fn visible<'a>(
    requests: &'a [HelpRequest],
    search_term: &str,
    filter: &Filter,
) -> Vec<&'a HelpRequest> {
    let needle = search_term.trim().to_lowercase();

    requests
        .iter()
        .filter(|request| matches_search(request, &needle) && filter.matches(request))
        .collect()
}

fn matches_search(request: &HelpRequest, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    request.title.to_lowercase().contains(needle)
        || request.description.to_lowercase().contains(needle)
}
