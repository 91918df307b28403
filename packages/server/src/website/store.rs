//! In-memory website store.
//!
//! Volatile, process-wide storage for generated websites. The store is
//! injected into handlers as shared state rather than living in a global;
//! all access goes through an async `RwLock`, so no reader ever observes a
//! partially constructed record.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::types::{GeneratedContent, GenerationRequest, Website};

/// Default number of websites returned by [`WebsiteStore::list_recent`].
pub const DEFAULT_LIST_LIMIT: usize = 10;

#[derive(Default)]
struct StoreInner {
    websites: HashMap<Uuid, Website>,
    /// Insertion order, used as the tie-break when timestamps collide.
    order: Vec<Uuid>,
}

/// Keyed in-memory store of generated website records.
#[derive(Default)]
pub struct WebsiteStore {
    inner: RwLock<StoreInner>,
}

impl WebsiteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a generation result, assigning a fresh id and timestamp.
    pub async fn create_website(
        &self,
        request: GenerationRequest,
        content: GeneratedContent,
    ) -> Website {
        let website = Website {
            id: Uuid::new_v4(),
            name: request.name,
            description: request.description,
            generated_html: content.html,
            generated_css: content.css,
            navigation_items: content.navigation_items,
            footer_content: content.footer_content,
            include_navigation: request.include_navigation,
            include_footer: request.include_footer,
            include_contact_form: request.include_contact_form,
            is_responsive: request.is_responsive,
            primary_color: request.primary_color,
            secondary_color: request.secondary_color,
            image_urls: request.image_urls,
            style_template: request.style_template,
            created_at: Utc::now(),
        };

        let mut inner = self.inner.write().await;
        inner.order.push(website.id);
        inner.websites.insert(website.id, website.clone());
        website
    }

    /// Look up a website by id.
    pub async fn get(&self, id: Uuid) -> Option<Website> {
        self.inner.read().await.websites.get(&id).cloned()
    }

    /// All stored websites, newest first, truncated to `limit`.
    pub async fn list_recent(&self, limit: usize) -> Vec<Website> {
        let inner = self.inner.read().await;
        let mut websites: Vec<Website> = inner
            .order
            .iter()
            .rev()
            .filter_map(|id| inner.websites.get(id).cloned())
            .collect();
        // Stable sort: equal timestamps keep reverse-insertion order.
        websites.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        websites.truncate(limit);
        websites
    }

    /// Number of stored websites.
    pub async fn count(&self) -> usize {
        self.inner.read().await.websites.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::website::demo::generate_demo_website;

    fn request(name: &str) -> GenerationRequest {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "description": "A professional landing page for a small design studio based in town.",
        }))
        .unwrap()
    }

    fn content(request: &GenerationRequest) -> GeneratedContent {
        generate_demo_website(request)
    }

    #[tokio::test]
    async fn test_create_then_get_returns_equal_record() {
        let store = WebsiteStore::new();
        let req = request("Acme");
        let created = store.create_website(req.clone(), content(&req)).await;

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(created, fetched);
        assert_eq!(fetched.name, "Acme");
        assert!(!fetched.generated_html.is_empty());
        assert!(!fetched.generated_css.is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_absent() {
        let store = WebsiteStore::new();
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let store = WebsiteStore::new();
        let req = request("Acme");
        let a = store.create_website(req.clone(), content(&req)).await;
        let b = store.create_website(req.clone(), content(&req)).await;
        assert_ne!(a.id, b.id);
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn test_list_recent_newest_first_with_limit() {
        let store = WebsiteStore::new();
        for name in ["First", "Second", "Third"] {
            let req = request(name);
            store.create_website(req.clone(), content(&req)).await;
        }

        let recent = store.list_recent(2).await;
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].name, "Third");
        assert_eq!(recent[1].name, "Second");
    }

    #[tokio::test]
    async fn test_list_recent_limit_exceeds_count() {
        let store = WebsiteStore::new();
        let req = request("Only");
        store.create_website(req.clone(), content(&req)).await;

        let recent = store.list_recent(DEFAULT_LIST_LIMIT).await;
        assert_eq!(recent.len(), 1);
    }
}
