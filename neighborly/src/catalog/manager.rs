//! In-memory request catalog.

use super::models::{HelpRequest, RequestId};
use super::seed;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The in-memory collection of help requests.
///
/// The catalog is newest-first: [`RequestCatalog::add`] prepends, and
/// [`RequestCatalog::list`] returns requests in that order. `add` is the
/// only mutator; there is no deletion or update. The collection is process
/// local and not persisted.
#[derive(Clone, Default)]
pub struct RequestCatalog {
    requests: Arc<RwLock<Vec<HelpRequest>>>,
}

impl RequestCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-populated with the given requests, newest first.
    pub fn with_requests(requests: Vec<HelpRequest>) -> Self {
        Self {
            requests: Arc::new(RwLock::new(requests)),
        }
    }

    /// Create a catalog seeded with the static sample data.
    pub fn seeded() -> Self {
        Self::with_requests(seed::sample_requests())
    }

    /// Add a request to the front of the catalog.
    pub async fn add(&self, request: HelpRequest) {
        let mut requests = self.requests.write().await;
        requests.insert(0, request);
    }

    /// All requests, newest first.
    pub async fn list(&self) -> Vec<HelpRequest> {
        self.requests.read().await.clone()
    }

    /// Requests owned by `owner_id`, preserving catalog order.
    pub async fn list_by_owner(&self, owner_id: &str) -> Vec<HelpRequest> {
        self.requests
            .read()
            .await
            .iter()
            .filter(|request| request.requester_id == owner_id)
            .cloned()
            .collect()
    }

    /// Look up a single request by id.
    pub async fn get(&self, id: RequestId) -> Option<HelpRequest> {
        self.requests
            .read()
            .await
            .iter()
            .find(|request| request.id == id)
            .cloned()
    }

    /// Number of requests in the catalog.
    pub async fn len(&self) -> usize {
        self.requests.read().await.len()
    }

    /// Whether the catalog holds no requests.
    pub async fn is_empty(&self) -> bool {
        self.requests.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::{Category, NewHelpRequest};

    fn request(title: &str, owner: &str) -> HelpRequest {
        HelpRequest::create(
            NewHelpRequest {
                title: title.to_string(),
                description: "details".to_string(),
                category: Category::Errands,
                location: "here".to_string(),
                ..Default::default()
            },
            owner.to_string(),
            "en",
        )
        .expect("test request is valid")
    }

    #[tokio::test]
    async fn add_prepends_newest_first() {
        let catalog = RequestCatalog::new();
        catalog.add(request("first", "u1")).await;
        catalog.add(request("second", "u1")).await;
        catalog.add(request("third", "u2")).await;

        let titles: Vec<String> = catalog
            .list()
            .await
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, ["third", "second", "first"]);
    }

    #[tokio::test]
    async fn list_by_owner_is_a_stable_filter() {
        let catalog = RequestCatalog::new();
        catalog.add(request("a", "u1")).await;
        catalog.add(request("b", "u2")).await;
        catalog.add(request("c", "u1")).await;

        let mine: Vec<String> = catalog
            .list_by_owner("u1")
            .await
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(mine, ["c", "a"]);
        assert!(catalog.list_by_owner("nobody").await.is_empty());
    }

    #[tokio::test]
    async fn get_finds_by_id() {
        let catalog = RequestCatalog::new();
        let r = request("findable", "u1");
        let id = r.id;
        catalog.add(r).await;

        assert_eq!(catalog.get(id).await.map(|r| r.title).as_deref(), Some("findable"));
        assert!(catalog.get(uuid::Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn seeded_catalog_is_not_empty() {
        let catalog = RequestCatalog::seeded();
        assert!(!catalog.is_empty().await);
    }
}
