//! In-memory collaborators for exercising resolvers without MongoDB.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use bson::Uuid;

use super::{
    ArgumentSearchCriteriaBuilder, FilterQuery, PostRepository, ProductCollection,
    RepositoryError, SearchCollaborators, SearchCriteria, SearchResult,
};
use crate::graphql::model::{post::Post, product::Product};

/// Serves posts from memory and counts the loads.
#[derive(Default)]
pub struct InMemoryPostRepository {
    pub posts: Vec<Post>,
    pub loads: AtomicUsize,
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn load(&self, post_id: Uuid) -> Result<Post, RepositoryError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.posts
            .iter()
            .find(|post| post.id == post_id)
            .cloned()
            .ok_or(RepositoryError::PostNotFound(post_id))
    }
}

/// Pages through in-memory products and records every call.
#[derive(Default)]
pub struct InMemoryFilterQuery {
    pub products: Vec<Product>,
    pub calls: Mutex<Vec<(SearchCriteria, String, ProductCollection)>>,
}

#[async_trait]
impl FilterQuery for InMemoryFilterQuery {
    async fn get_result(
        &self,
        criteria: &SearchCriteria,
        entity_type: &str,
        collection: &ProductCollection,
    ) -> Result<SearchResult, RepositoryError> {
        self.calls.lock().unwrap().push((
            criteria.clone(),
            entity_type.to_string(),
            collection.clone(),
        ));
        let matches: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| collection.product_ids().contains(&product.id))
            .collect();
        let (skip, limit) = criteria.page_window();
        let items = matches
            .iter()
            .skip(skip as usize)
            .take(limit.map_or(usize::MAX, |l| l as usize))
            .map(|product| (*product).clone())
            .collect();
        Ok(SearchResult {
            total_count: matches.len() as u64,
            items,
        })
    }
}

/// Creates `count` products named after their position.
pub fn products(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| Product {
            id: Uuid::new(),
            name: format!("Product {}", i),
            sku: format!("SKU-{:03}", i),
            price: 10.0 + i as f64,
        })
        .collect()
}

/// Creates a post selecting all `products`.
pub fn post_with(products: &[Product]) -> Post {
    Post {
        id: Uuid::new(),
        name: "Spring collection".to_string(),
        selected_product_ids: products.iter().map(|product| product.id).collect(),
    }
}

/// Collaborators holding the in-memory fakes, handed back for inspection.
pub fn collaborators(
    posts: Vec<Post>,
    products: Vec<Product>,
) -> (
    SearchCollaborators,
    Arc<InMemoryPostRepository>,
    Arc<InMemoryFilterQuery>,
) {
    let post_repository = Arc::new(InMemoryPostRepository {
        posts,
        ..Default::default()
    });
    let filter_query = Arc::new(InMemoryFilterQuery {
        products,
        ..Default::default()
    });
    let collaborators = SearchCollaborators {
        post_repository: post_repository.clone(),
        search_criteria_builder: Arc::new(ArgumentSearchCriteriaBuilder),
        filter_query: filter_query.clone(),
    };
    (collaborators, post_repository, filter_query)
}
