use std::sync::Arc;

use async_trait::async_trait;
use bson::Uuid;
use mongodb::Database;

use crate::graphql::{
    model::{post::Post, product::Product},
    resolver::products_by_post::ProductsByPostResolver,
};

pub mod criteria;
pub mod error;
pub mod mongo;

#[cfg(test)]
pub mod fake;

pub use criteria::{ArgumentSearchCriteriaBuilder, SearchCriteria, SearchCriteriaBuilder};
pub use error::RepositoryError;

/// Products associated with a post, used to restrict a search to them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductCollection {
    product_ids: Vec<Uuid>,
}

impl ProductCollection {
    pub fn new(product_ids: Vec<Uuid>) -> Self {
        Self { product_ids }
    }

    pub fn product_ids(&self) -> &[Uuid] {
        &self.product_ids
    }

    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }
}

/// Total amount of matches and the items of the requested page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResult {
    pub total_count: u64,
    pub items: Vec<Product>,
}

/// Loads blog posts by id.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn load(&self, post_id: Uuid) -> Result<Post, RepositoryError>;
}

/// Executes a search restricted to a pre-filtered collection.
#[async_trait]
pub trait FilterQuery: Send + Sync {
    /// * `criteria` - Paging and sorting of the search.
    /// * `entity_type` - Type of searched entities, e.g. `product`.
    /// * `collection` - Pre-filter restricting the search scope.
    async fn get_result(
        &self,
        criteria: &SearchCriteria,
        entity_type: &str,
        collection: &ProductCollection,
    ) -> Result<SearchResult, RepositoryError>;
}

/// Collaborators of the product search, shared through the GraphQL schema data.
#[derive(Clone)]
pub struct SearchCollaborators {
    pub post_repository: Arc<dyn PostRepository>,
    pub search_criteria_builder: Arc<dyn SearchCriteriaBuilder>,
    pub filter_query: Arc<dyn FilterQuery>,
}

impl SearchCollaborators {
    /// Collaborators backed by the `posts` and `products` collections of `db_client`.
    pub fn mongodb(db_client: &Database) -> Self {
        Self {
            post_repository: Arc::new(mongo::MongoPostRepository::new(db_client)),
            search_criteria_builder: Arc::new(ArgumentSearchCriteriaBuilder),
            filter_query: Arc::new(mongo::MongoFilterQuery::new(db_client.clone())),
        }
    }

    /// Borrows the collaborators for a single resolution.
    pub fn products_by_post_resolver(&self) -> ProductsByPostResolver<'_> {
        ProductsByPostResolver::new(
            self.post_repository.as_ref(),
            self.search_criteria_builder.as_ref(),
            self.filter_query.as_ref(),
        )
    }
}
